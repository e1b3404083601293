//! Error types for the Sluice partition stage
//!
//! Evaluation failures come in three tiers. `OperationError` is the terminal
//! form: fully contextualized, it propagates unchanged. `ApplicationError` is
//! typed but still missing positional context, which the engine attaches
//! before propagation. Anything else is an untyped failure (`anyhow::Error`)
//! that gets normalized into an `OperationError` so callers can rely on a
//! uniform error shape.
//!
//! Structured errors are immutable values; context is attached through
//! consuming `with_*` builders rather than in-place mutation.

use thiserror::Error;

/// Remediation hint attached when strict type validation rejects a comparison
pub const LOOSE_TYPE_VALIDATION_HINT: &str =
    "Try changing the type of comparison, or enable loose type validation to cast values automatically";

/// Fully contextualized failure; the terminal error form
///
/// Carries the offending record's input position and, optionally, a
/// remediation hint. Once an error is in this shape it is never re-wrapped.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct OperationError {
    /// Human-readable description of the failure
    pub message: String,

    /// Input position of the record that triggered the failure
    pub item_index: Option<usize>,

    /// Remediation hint shown alongside the message
    pub description: Option<String>,
}

impl OperationError {
    /// Create an operation error with no positional context yet
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            item_index: None,
            description: None,
        }
    }

    /// Normalize an untyped failure into the terminal form
    pub fn from_source(source: anyhow::Error) -> Self {
        Self::new(source.to_string())
    }

    /// Attach the offending record's input position
    pub fn with_item_index(mut self, item_index: usize) -> Self {
        self.item_index = Some(item_index);
        self
    }

    /// Attach a remediation hint
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Typed failure that knows what went wrong but not yet where
///
/// The engine attaches the offending record's input position before
/// propagating it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApplicationError {
    /// Human-readable description of the failure
    pub message: String,

    /// Input position of the record that triggered the failure
    pub item_index: Option<usize>,
}

impl ApplicationError {
    /// Create an application error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            item_index: None,
        }
    }

    /// Attach the offending record's input position
    pub fn with_item_index(mut self, item_index: usize) -> Self {
        self.item_index = Some(item_index);
        self
    }
}

/// Failure raised by a condition evaluator
#[derive(Error, Debug)]
pub enum EvalError {
    /// Fully contextualized failure; passes through classification untouched
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// Typed failure still missing positional context
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Untyped failure from arbitrary evaluator internals
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Error that aborts a partition run
///
/// An untyped evaluator failure never escapes in this shape; the engine
/// normalizes it into an `OperationError` first.
#[derive(Error, Debug)]
pub enum PartitionError {
    /// Terminal, fully contextualized failure
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// Typed failure, positional context attached by the engine
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// Result type for condition evaluation
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Result type for a partition run
pub type Result<T> = std::result::Result<T, PartitionError>;
