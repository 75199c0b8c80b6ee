//! Engine selection and the factory entry point

use tracing::{debug, warn};

use super::{Engine, EngineError, EngineKind};
use crate::reduce::ReduceOp;
use crate::reference::ReferenceEngine;
use crate::tree::TreeEngine;

/// Which engine to build and which operator it reduces with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Engine implementation
    pub kind: EngineKind,

    /// Reduction operator
    #[cfg_attr(feature = "serde", serde(rename = "operator"))]
    pub op: ReduceOp,
}

impl EngineConfig {
    /// Create configuration from already-resolved parts
    pub fn new(kind: EngineKind, op: ReduceOp) -> Self {
        Self { kind, op }
    }

    /// Resolve an engine kind name and an operator name
    ///
    /// Both names are checked before anything is built.
    pub fn from_names(kind: &str, op: &str) -> Result<Self, EngineError> {
        let resolved = kind
            .parse::<EngineKind>()
            .and_then(|kind| op.parse::<ReduceOp>().map(|op| Self::new(kind, op)));
        if let Err(err) = &resolved {
            warn!(kind, op, %err, "rejected engine configuration");
        }
        resolved
    }

    /// Set engine kind
    pub fn with_kind(mut self, kind: EngineKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set reduction operator
    pub fn with_operator(mut self, op: ReduceOp) -> Self {
        self.op = op;
        self
    }

    /// Build the configured engine over a private copy of `values`
    pub fn build<T: Ord + Clone>(&self, values: &[T]) -> Result<Engine<T>, EngineError> {
        debug!(kind = %self.kind, op = %self.op, len = values.len(), "creating engine");
        match self.kind {
            EngineKind::Tree => TreeEngine::new(values, self.op).map(Engine::Tree),
            EngineKind::Reference => ReferenceEngine::new(values, self.op).map(Engine::Reference),
        }
    }
}

/// Factory entry point
///
/// Snapshots the first `length` elements of `values` into an engine of the
/// named kind reducing with the named operator. Unrecognized names fail
/// before any engine state is built.
pub fn create<T: Ord + Clone>(
    kind: &str,
    op: &str,
    values: &[T],
    length: usize,
) -> Result<Engine<T>, EngineError> {
    let config = EngineConfig::from_names(kind, op)?;
    let snapshot = values.get(..length).ok_or(EngineError::LengthExceedsInput {
        length,
        available: values.len(),
    })?;
    config.build(snapshot)
}
