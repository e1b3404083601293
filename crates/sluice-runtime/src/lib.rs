//! Sluice Runtime - Partition engine for the Sluice partition stage
//!
//! This crate provides the engine that splits an ordered sequence of records
//! into "kept" and "discarded" outputs based on a per-record condition, plus
//! the evaluator contract it calls and a built-in field-condition evaluator.

pub mod config;
pub mod engine;
pub mod evaluator;

// Re-export main types
pub use config::{PartitionOptions, RunConfig, TypeValidation};
pub use engine::{PartitionEngine, Partitioned};
pub use evaluator::{ConditionEvaluator, FieldConditionEvaluator};

// Re-export commonly used types from sluice-core
pub use sluice_core::{
    ApplicationError, EvalError, EvalResult, OperationError, PartitionError, Record, Result, Value,
};
