//! Condition evaluation
//!
//! `ConditionEvaluator` is the contract the partition engine calls once per
//! record. `FieldConditionEvaluator` is the built-in implementation over
//! structured `ConditionSet` specifications.

mod comparison;

use crate::config::RunConfig;
use sluice_core::{Combinator, Condition, ConditionSet, EvalResult, Record, Value};

/// Per-record predicate contract consumed by the partition engine
///
/// Implementations must be pure with respect to engine state: the engine
/// calls `evaluate` once per record, in input order, and assumes calls do
/// not affect each other.
pub trait ConditionEvaluator {
    /// Condition specification this evaluator understands; opaque to the engine
    type Spec;

    /// Evaluate the condition against one record
    fn evaluate(&self, record: &Record, spec: &Self::Spec, config: &RunConfig)
        -> EvalResult<bool>;
}

/// Built-in evaluator over structured field conditions
///
/// Each condition resolves its field by dot-path lookup into the record
/// payload; missing fields resolve to Null and compare as no match.
#[derive(Debug, Default)]
pub struct FieldConditionEvaluator;

impl FieldConditionEvaluator {
    /// Create a new field-condition evaluator
    pub fn new() -> Self {
        Self
    }

    fn check(&self, record: &Record, condition: &Condition, config: &RunConfig) -> EvalResult<bool> {
        let left = lookup_field(&record.payload, &condition.field);
        comparison::compare(&left, condition.comparator, &condition.value, config)
    }
}

impl ConditionEvaluator for FieldConditionEvaluator {
    type Spec = ConditionSet;

    fn evaluate(
        &self,
        record: &Record,
        spec: &ConditionSet,
        config: &RunConfig,
    ) -> EvalResult<bool> {
        // An unconfigured stage passes everything through
        if spec.is_empty() {
            return Ok(true);
        }

        match spec.combinator {
            Combinator::All => {
                for condition in &spec.conditions {
                    if !self.check(record, condition, config)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Combinator::Any => {
                for condition in &spec.conditions {
                    if self.check(record, condition, config)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

/// Navigate a dot-path into a payload
///
/// Returns Value::Null if any part of the path is not found (graceful
/// handling, so a condition on a missing field discards rather than errors).
fn lookup_field(payload: &Value, path: &str) -> Value {
    let mut current = payload;
    for segment in path.split('.') {
        match current {
            Value::Object(map) => match map.get(segment) {
                Some(value) => current = value,
                None => {
                    tracing::debug!("Field not found: {}, treating as null", segment);
                    return Value::Null;
                }
            },
            _ => {
                tracing::debug!(
                    "Cannot access field {} on a {}, treating as null",
                    segment,
                    current.type_name()
                );
                return Value::Null;
            }
        }
    }
    current.clone()
}
