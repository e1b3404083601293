//! Condition specification types
//!
//! The partition engine treats the condition specification as opaque and
//! passes it through to the evaluator unchanged. These types describe the
//! structured specification the built-in field-condition evaluator consumes.

pub mod types;

pub use types::{Combinator, Comparator, Condition, ConditionSet};
