//! Segment tree nodes
//!
//! Each node caches the aggregate of its span. Inner nodes own exactly two
//! children; dropping a node drops its whole subtree.

use super::Span;
use crate::reduce::Reducer;

/// Segment tree node
#[derive(Debug, Clone)]
pub struct Node<T> {
    span: Span,

    /// Aggregate of `span`
    value: T,

    /// `[left child, right child]`, absent for leaves
    children: Option<Box<[Node<T>; 2]>>,
}

impl<T: Clone> Node<T> {
    /// Build the subtree over `span` from `source`
    ///
    /// Requires `span.right < source.len()`.
    pub(crate) fn build<R: Reducer<T>>(span: Span, source: &[T], reducer: &R) -> Self {
        debug_assert!(span.right < source.len(), "span {span} outside source");

        if span.is_leaf() {
            return Self {
                span,
                value: source[span.left].clone(),
                children: None,
            };
        }

        let (left_span, right_span) = span.children();
        let left = Node::build(left_span, source, reducer);
        let right = Node::build(right_span, source, reducer);
        let value = reducer.reduce(left.value.clone(), right.value.clone());

        Self {
            span,
            value,
            children: Some(Box::new([left, right])),
        }
    }

    /// Overwrite position `pos` and refresh every aggregate on the path to it
    ///
    /// Panics if `pos` lies outside the span.
    pub(crate) fn update<R: Reducer<T>>(&mut self, pos: usize, value: T, reducer: &R) {
        assert!(self.span.contains(pos), "{pos} outside {}", self.span);

        match self.children.as_deref_mut() {
            None => self.value = value,
            Some([left, right]) => {
                if pos <= self.span.midpoint() {
                    left.update(pos, value, reducer);
                } else {
                    right.update(pos, value, reducer);
                }
                self.value = reducer.reduce(left.value.clone(), right.value.clone());
            }
        }
    }

    /// Aggregate of `[left, right]`
    ///
    /// Panics unless the range lies inside this node's span. Ranges straddling
    /// the midpoint are split there and the halves recombined.
    pub(crate) fn query<R: Reducer<T>>(&self, left: usize, right: usize, reducer: &R) -> T {
        assert!(
            self.span.covers(left, right),
            "[{left}, {right}] outside {}",
            self.span
        );

        if left == self.span.left && right == self.span.right {
            return self.value.clone();
        }

        let Some([left_child, right_child]) = self.children.as_deref() else {
            unreachable!("leaf {} cannot hold strict sub-range [{left}, {right}]", self.span);
        };
        let mid = self.span.midpoint();

        if right <= mid {
            left_child.query(left, right, reducer)
        } else if left > mid {
            right_child.query(left, right, reducer)
        } else {
            reducer.reduce(
                left_child.query(left, mid, reducer),
                right_child.query(mid + 1, right, reducer),
            )
        }
    }
}

impl<T> Node<T> {
    /// Covered interval
    pub fn span(&self) -> Span {
        self.span
    }

    /// Cached aggregate of the span
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Child nodes, `None` for leaves
    pub fn children(&self) -> Option<(&Node<T>, &Node<T>)> {
        self.children
            .as_deref()
            .map(|[left, right]| (left, right))
    }

    /// Number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Longest path from this node down to a leaf
    pub fn depth(&self) -> usize {
        match self.children() {
            None => 0,
            Some((left, right)) => 1 + left.depth().max(right.depth()),
        }
    }
}
