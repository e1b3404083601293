//! Partition engine
//!
//! Deterministic, order-preserving partition of records into kept and
//! discarded outputs, with provenance stamping and layered error recovery.
//! Records are processed strictly one at a time, in input order; the
//! evaluator call is the only suspension point.

use crate::config::{PartitionOptions, TypeValidation};
use crate::evaluator::ConditionEvaluator;
use serde::{Deserialize, Serialize};
use sluice_core::error::LOOSE_TYPE_VALIDATION_HINT;
use sluice_core::{EvalError, OperationError, PartitionError, Record, Result};

/// Output of a partition run
///
/// Both sequences preserve the relative input order of their records, and
/// every record carries a provenance tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partitioned {
    /// Records whose condition evaluated true
    pub kept: Vec<Record>,

    /// Records whose condition evaluated false, or failed under
    /// continue-on-fail
    pub discarded: Vec<Record>,
}

impl Partitioned {
    /// Total number of records across both outputs
    pub fn len(&self) -> usize {
        self.kept.len() + self.discarded.len()
    }

    /// Returns true if both outputs are empty
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty() && self.discarded.is_empty()
    }
}

/// Order-preserving partition of records into kept / discarded
///
/// The evaluator and the run-level continue-on-fail flag are injected by the
/// host; the engine never reads ambient state.
pub struct PartitionEngine<E> {
    evaluator: E,
    continue_on_fail: bool,
}

impl<E: ConditionEvaluator> PartitionEngine<E> {
    /// Create an engine around a condition evaluator
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            continue_on_fail: false,
        }
    }

    /// Convert per-record evaluation failures into discarded records
    /// instead of aborting the run
    pub fn with_continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }

    /// Split records into kept and discarded outputs
    ///
    /// Each record is evaluated once, in ascending input order. A record
    /// whose condition holds goes to `kept`, otherwise to `discarded`;
    /// records without a provenance tag are stamped with their input
    /// position. On evaluator failure the run either discards the record
    /// (continue-on-fail) or aborts with a fully contextualized error; an
    /// aborted run returns no partial output.
    pub fn partition(
        &self,
        records: Vec<Record>,
        spec: &E::Spec,
        options: &PartitionOptions,
    ) -> Result<Partitioned> {
        // Flags are resolved once and apply uniformly to every record
        let config = options.resolve();

        let mut kept = Vec::new();
        let mut discarded = Vec::new();

        for (item_index, mut record) in records.into_iter().enumerate() {
            match self.evaluator.evaluate(&record, spec, &config) {
                Ok(pass) => {
                    record.stamp_provenance(item_index);
                    tracing::debug!("Record {} evaluated to {}", item_index, pass);
                    if pass {
                        kept.push(record);
                    } else {
                        discarded.push(record);
                    }
                }
                Err(error) if self.continue_on_fail => {
                    tracing::debug!(
                        "Record {} failed evaluation ({}), discarding",
                        item_index,
                        error
                    );
                    record.stamp_provenance(item_index);
                    discarded.push(record);
                }
                Err(error) => {
                    return Err(classify_failure(error, item_index, config.type_validation));
                }
            }
        }

        Ok(Partitioned { kept, discarded })
    }
}

/// Normalize an evaluator failure into the error that aborts the run
fn classify_failure(
    error: EvalError,
    item_index: usize,
    type_validation: TypeValidation,
) -> PartitionError {
    match error {
        // Already fully contextualized; never re-wrapped
        EvalError::Operation(error) => PartitionError::Operation(error),

        // Typed but missing positional context
        EvalError::Application(error) => {
            PartitionError::Application(error.with_item_index(item_index))
        }

        // Untyped; normalize to the terminal form
        EvalError::Other(source) => {
            let mut error = OperationError::from_source(source).with_item_index(item_index);
            if type_validation == TypeValidation::Strict && error.description.is_none() {
                error = error.with_description(LOOSE_TYPE_VALIDATION_HINT);
            }
            PartitionError::Operation(error)
        }
    }
}
