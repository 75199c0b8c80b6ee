//! Built-in order-based reducers

use std::cmp;
use std::fmt;
use std::str::FromStr;

use super::Reducer;
use crate::engine::EngineError;

/// Built-in reducers selecting the winner under `T`'s total order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReduceOp {
    /// Smallest value wins
    Min,

    /// Largest value wins
    Max,
}

impl ReduceOp {
    /// Every built-in operator, for harnesses that enumerate them
    pub const ALL: [ReduceOp; 2] = [ReduceOp::Min, ReduceOp::Max];

    /// Canonical operator name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            ReduceOp::Min => "min",
            ReduceOp::Max => "max",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ReduceOp::Min => "Minimum of the range under the value ordering.",
            ReduceOp::Max => "Maximum of the range under the value ordering.",
        }
    }
}

impl<T: Ord> Reducer<T> for ReduceOp {
    #[inline]
    fn reduce(&self, a: T, b: T) -> T {
        match self {
            ReduceOp::Min => cmp::min(a, b),
            ReduceOp::Max => cmp::max(a, b),
        }
    }
}

impl FromStr for ReduceOp {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReduceOp::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| EngineError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
