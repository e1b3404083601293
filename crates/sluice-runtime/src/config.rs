//! Run configuration
//!
//! The host supplies `PartitionOptions`; the engine resolves them into a
//! `RunConfig` once per run. The resolved flags are immutable for the
//! duration of the run and apply uniformly to every record.

use serde::{Deserialize, Serialize};

/// Options recognized by the host configuration surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartitionOptions {
    /// Whether to ignore letter case when evaluating conditions
    pub ignore_case: bool,

    /// Whether to cast value types when a comparison would otherwise fail
    pub loose_type_validation: bool,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            loose_type_validation: true,
        }
    }
}

impl PartitionOptions {
    /// Resolve the per-run configuration flags
    pub fn resolve(&self) -> RunConfig {
        RunConfig {
            case_sensitive: !self.ignore_case,
            type_validation: if self.loose_type_validation {
                TypeValidation::Loose
            } else {
                TypeValidation::Strict
            },
        }
    }
}

/// Strictness of type checking during comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeValidation {
    /// Operand types must match; mismatches fail the record
    Strict,
    /// Operands are cast where a natural reading exists
    Loose,
}

/// Per-run configuration resolved once from `PartitionOptions`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Whether string comparisons are case sensitive
    pub case_sensitive: bool,

    /// Type checking strictness
    pub type_validation: TypeValidation,
}
