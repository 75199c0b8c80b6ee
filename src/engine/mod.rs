//! Shared range-query/update contract
//!
//! Both engines answer inclusive range aggregates and accept point updates
//! through [`RangeEngine`]. Index validation happens here, once, at the engine
//! boundary; nothing is clamped.

mod config;
mod kind;

pub use config::{create, EngineConfig};
pub use kind::EngineKind;

use thiserror::Error;

use crate::reduce::ReduceOp;
use crate::reference::ReferenceEngine;
use crate::tree::TreeEngine;

/// Errors raised while configuring or driving an engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Engine kind name not recognized
    #[error("unrecognized engine kind '{0}'")]
    UnknownKind(String),

    /// Operator name not recognized
    #[error("unrecognized operator '{0}'")]
    UnknownOperator(String),

    /// Engines cover at least one element
    #[error("cannot build an engine over an empty array")]
    EmptyInput,

    /// Declared length is longer than the supplied values
    #[error("length {length} exceeds the {available} values supplied")]
    LengthExceedsInput {
        /// Requested snapshot length
        length: usize,
        /// Number of values actually supplied
        available: usize,
    },

    /// Point index outside `[0, len)`
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Offending index
        index: usize,
        /// Engine length
        len: usize,
    },

    /// Query range inverted or outside `[0, len)`
    #[error("invalid range [{left}, {right}] for length {len}")]
    InvalidRange {
        /// Requested left bound (inclusive)
        left: usize,
        /// Requested right bound (inclusive)
        right: usize,
        /// Engine length
        len: usize,
    },
}

/// Range-aggregation engine over a fixed-length array
pub trait RangeEngine<T> {
    /// Number of elements covered
    fn len(&self) -> usize;

    /// Always false for a constructed engine
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which implementation answers the calls
    fn kind(&self) -> EngineKind;

    /// Aggregate of the inclusive range `[left, right]`
    fn query(&self, left: usize, right: usize) -> Result<T, EngineError>;

    /// Replace the value at `pos`
    fn update(&mut self, pos: usize, value: T) -> Result<(), EngineError>;
}

/// Reject `pos` outside `[0, len)`
pub(crate) fn check_index(pos: usize, len: usize) -> Result<(), EngineError> {
    if pos < len {
        Ok(())
    } else {
        Err(EngineError::IndexOutOfBounds { index: pos, len })
    }
}

/// Reject inverted ranges and ranges reaching past `len - 1`
pub(crate) fn check_range(left: usize, right: usize, len: usize) -> Result<(), EngineError> {
    if left <= right && right < len {
        Ok(())
    } else {
        Err(EngineError::InvalidRange { left, right, len })
    }
}

/// Engine produced by the factory
///
/// Tagged union over the two implementations so callers can hold either one
/// without boxing.
#[derive(Debug, Clone)]
pub enum Engine<T> {
    /// Segment tree (`"fast"`)
    Tree(TreeEngine<T, ReduceOp>),

    /// Brute-force oracle (`"slow"`)
    Reference(ReferenceEngine<T, ReduceOp>),
}

impl<T> Engine<T> {
    /// Operator the engine was built with
    pub fn operator(&self) -> ReduceOp {
        match self {
            Engine::Tree(tree) => *tree.reducer(),
            Engine::Reference(reference) => *reference.reducer(),
        }
    }
}

impl<T: Ord + Clone> RangeEngine<T> for Engine<T> {
    fn len(&self) -> usize {
        match self {
            Engine::Tree(tree) => tree.len(),
            Engine::Reference(reference) => reference.len(),
        }
    }

    fn kind(&self) -> EngineKind {
        match self {
            Engine::Tree(_) => EngineKind::Tree,
            Engine::Reference(_) => EngineKind::Reference,
        }
    }

    fn query(&self, left: usize, right: usize) -> Result<T, EngineError> {
        match self {
            Engine::Tree(tree) => tree.query(left, right),
            Engine::Reference(reference) => reference.query(left, right),
        }
    }

    fn update(&mut self, pos: usize, value: T) -> Result<(), EngineError> {
        match self {
            Engine::Tree(tree) => tree.update(pos, value),
            Engine::Reference(reference) => reference.update(pos, value),
        }
    }
}
