//! Sluice Core - Core types for the Sluice partition stage
//!
//! This crate provides the fundamental types used across the Sluice ecosystem:
//! - Value types for runtime data
//! - Record and provenance definitions
//! - Condition specification types
//! - Error types

pub mod condition;
pub mod error;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use condition::{Combinator, Comparator, Condition, ConditionSet};
pub use error::{
    ApplicationError, EvalError, EvalResult, OperationError, PartitionError, Result,
};
pub use record::{Provenance, Record};
pub use types::Value;
