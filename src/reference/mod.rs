//! Brute-force reference engine
//!
//! Keeps a flat copy of the array and recomputes every query from scratch.
//! Its answers follow directly from the array state at call time, which makes
//! it the oracle the segment tree is checked against.

use tracing::trace;

use crate::engine::{check_index, check_range, EngineError, EngineKind, RangeEngine};
use crate::reduce::{ReduceOp, Reducer};

/// Range engine answering queries by linear scan
#[derive(Debug, Clone)]
pub struct ReferenceEngine<T, R = ReduceOp> {
    values: Vec<T>,
    reducer: R,
}

impl<T: Clone, R: Reducer<T>> ReferenceEngine<T, R> {
    /// Copy `values` element-wise
    pub fn new(values: &[T], reducer: R) -> Result<Self, EngineError> {
        if values.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        Ok(Self {
            values: values.to_vec(),
            reducer,
        })
    }
}

impl<T, R> ReferenceEngine<T, R> {
    /// Reducer the scan folds with
    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Current array contents
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Clone, R: Reducer<T>> RangeEngine<T> for ReferenceEngine<T, R> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Reference
    }

    fn query(&self, left: usize, right: usize) -> Result<T, EngineError> {
        check_range(left, right, self.values.len())?;
        trace!(left, right, "reference query");
        let first = self.values[left].clone();
        Ok(self.values[left + 1..=right]
            .iter()
            .fold(first, |acc, value| self.reducer.reduce(acc, value.clone())))
    }

    fn update(&mut self, pos: usize, value: T) -> Result<(), EngineError> {
        check_index(pos, self.values.len())?;
        trace!(pos, "reference update");
        self.values[pos] = value;
        Ok(())
    }
}
