//! Record and provenance types
//!
//! A `Record` is one unit of data flowing through the stage: an opaque
//! payload plus an optional provenance tag recording which original input
//! position it traces back to. Provenance survives across stages, so a tag
//! set upstream is never overwritten here.

use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Provenance tag: the original input position a record traces back to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Zero-based input position
    pub item: usize,
}

impl Provenance {
    /// Create a provenance tag for the given input position
    pub fn new(item: usize) -> Self {
        Self { item }
    }
}

/// One unit of data flowing through the pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque payload; the partition engine never inspects its shape
    pub payload: Value,

    /// Where this record originated; filled during a run when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl Record {
    /// Create a record with no provenance
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            provenance: None,
        }
    }

    /// Create a record carrying provenance from an upstream stage
    pub fn with_provenance(mut self, item: usize) -> Self {
        self.provenance = Some(Provenance::new(item));
        self
    }

    /// Fill in provenance if absent
    ///
    /// A tag that arrived with the record (set by an upstream stage) is
    /// preserved, not overwritten.
    pub fn stamp_provenance(&mut self, item: usize) {
        if self.provenance.is_none() {
            self.provenance = Some(Provenance::new(item));
        }
    }
}
