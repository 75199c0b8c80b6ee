//! # Range Aggregation over a Mutable Array
//!
//! Answers "min/max of the elements between index L and R" while point
//! updates keep arriving, through two interchangeable engines:
//!
//! 1. **Tree engine** (`"fast"`): segment tree built by midpoint recursion,
//!    O(log n) query and update
//! 2. **Reference engine** (`"slow"`): linear scan over a private copy,
//!    kept as the correctness oracle for the tree
//!
//! Both are generic over a [`Reducer`]: any associative, commutative,
//! idempotent operator. [`ReduceOp::Min`] and [`ReduceOp::Max`] are built in.
//!
//! ## Usage Example
//!
//! ```
//! use rangeagg::{create, RangeEngine};
//!
//! let values = [5, 3, 8, 1, 9];
//! let mut fast = create("fast", "max", &values, values.len())?;
//! let mut slow = create("slow", "max", &values, values.len())?;
//!
//! fast.update(4, 2)?;
//! slow.update(4, 2)?;
//! assert_eq!(fast.query(0, 4)?, 8);
//! assert_eq!(fast.query(0, 4)?, slow.query(0, 4)?);
//! # Ok::<(), rangeagg::EngineError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod engine;    // Shared contract, errors, factory
pub mod reduce;    // Reduction operators
pub mod reference; // Brute-force oracle
pub mod tree;      // Segment tree

// Re-exports for convenience
pub use engine::{create, Engine, EngineConfig, EngineError, EngineKind, RangeEngine};
pub use reduce::{FnReducer, ReduceOp, Reducer};
pub use reference::ReferenceEngine;
pub use tree::TreeEngine;
