//! Structured condition specification
//!
//! A condition set is a combinator plus a list of field comparisons. This is
//! structured configuration data, not an expression language; there is no
//! grammar to parse.

use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Comparison operators understood by the built-in evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparator {
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// Substring or array membership
    Contains,
    /// String prefix
    StartsWith,
    /// String suffix
    EndsWith,
}

impl Comparator {
    /// Returns true if this comparator orders its operands
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Comparator::Gt | Comparator::Ge | Comparator::Lt | Comparator::Le
        )
    }

    /// Returns true if this is a substring-style operator
    pub fn is_substring(&self) -> bool {
        matches!(
            self,
            Comparator::Contains | Comparator::StartsWith | Comparator::EndsWith
        )
    }
}

/// A single field comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Dot-path into the record payload (e.g. "user.profile.email")
    pub field: String,

    /// Comparison operator
    pub comparator: Comparator,

    /// Value to compare against
    pub value: Value,
}

impl Condition {
    /// Create a new condition
    pub fn new(field: impl Into<String>, comparator: Comparator, value: Value) -> Self {
        Self {
            field: field.into(),
            comparator,
            value,
        }
    }
}

/// How individual condition verdicts combine into one verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Combinator {
    /// All conditions must be true (AND logic)
    All,
    /// At least one condition must be true (OR logic)
    Any,
}

/// The full condition specification for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionSet {
    /// How condition verdicts combine
    pub combinator: Combinator,

    /// The conditions to evaluate per record
    pub conditions: Vec<Condition>,
}

impl ConditionSet {
    /// Create an All (AND) condition set
    pub fn all(conditions: Vec<Condition>) -> Self {
        Self {
            combinator: Combinator::All,
            conditions,
        }
    }

    /// Create an Any (OR) condition set
    pub fn any(conditions: Vec<Condition>) -> Self {
        Self {
            combinator: Combinator::Any,
            conditions,
        }
    }

    /// Returns true if no conditions are configured
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
