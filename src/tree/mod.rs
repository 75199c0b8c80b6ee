//! Segment tree engine
//!
//! Balanced binary tree over [0, len-1] built by midpoint recursion.
//! Every node caches the reduction of its span, so:
//!   build:  O(n) time, 2n-1 nodes
//!   update: one root-to-leaf path, O(log n)
//!   query:  O(log n) node visits, aligned spans answered from cache

mod node;
mod span;

pub use node::Node;
pub use span::Span;

use tracing::{debug, debug_span, trace};

use crate::engine::{check_index, check_range, EngineError, EngineKind, RangeEngine};
use crate::reduce::{ReduceOp, Reducer};

/// Range engine backed by a segment tree
#[derive(Debug, Clone)]
pub struct TreeEngine<T, R = ReduceOp> {
    root: Node<T>,
    reducer: R,
    len: usize,
}

impl<T: Clone, R: Reducer<T>> TreeEngine<T, R> {
    /// Build the tree over a private copy of `values`
    pub fn new(values: &[T], reducer: R) -> Result<Self, EngineError> {
        if values.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let len = values.len();
        let _span = debug_span!("build_tree", len).entered();
        let root = Node::build(Span::covering(len), values, &reducer);
        debug!(nodes = root.node_count(), depth = root.depth(), "segment tree built");

        Ok(Self { root, reducer, len })
    }
}

impl<T, R> TreeEngine<T, R> {
    /// Reducer the tree aggregates with
    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Root node, covering `[0, len-1]`
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Height of the tree: ⌈log2 len⌉
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Total nodes: 2·len - 1
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl<T: Clone, R: Reducer<T>> RangeEngine<T> for TreeEngine<T, R> {
    fn len(&self) -> usize {
        self.len
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Tree
    }

    fn query(&self, left: usize, right: usize) -> Result<T, EngineError> {
        check_range(left, right, self.len)?;
        trace!(left, right, "tree query");
        Ok(self.root.query(left, right, &self.reducer))
    }

    fn update(&mut self, pos: usize, value: T) -> Result<(), EngineError> {
        check_index(pos, self.len)?;
        trace!(pos, "tree update");
        self.root.update(pos, value, &self.reducer);
        Ok(())
    }
}
