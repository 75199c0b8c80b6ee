//! Node coverage intervals
//!
//! Span = inclusive interval [left, right] of array indices
//! Children split at the midpoint: m = ⌊(left + right) / 2⌋
//!   Left child: [left, m]
//!   Right child: [m+1, right]

use std::fmt;

/// Inclusive index interval covered by a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Leftmost covered index (inclusive)
    pub left: usize,

    /// Rightmost covered index (inclusive)
    pub right: usize,
}

impl Span {
    /// Create span `[left, right]`
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right, "inverted span [{left}, {right}]");
        Self { left, right }
    }

    /// Span covering a whole array of `len` elements
    pub fn covering(len: usize) -> Self {
        debug_assert!(len > 0, "empty arrays have no covering span");
        Self::new(0, len - 1)
    }

    /// Check if leaf (unit interval)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == self.right
    }

    /// Number of covered indices
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Split point: ⌊(left + right) / 2⌋
    ///
    /// Written to avoid overflowing `left + right` near `usize::MAX`.
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }

    /// Whether `pos` lies inside the span
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.left <= pos && pos <= self.right
    }

    /// Whether `[left, right]` lies inside the span
    #[inline]
    pub fn covers(&self, left: usize, right: usize) -> bool {
        self.left <= left && left <= right && right <= self.right
    }

    /// Children via midpoint split
    ///
    /// Returns: ([left, mid], [mid+1, right])
    /// Each child holds at most ⌈len / 2⌉ indices.
    pub fn children(&self) -> (Span, Span) {
        debug_assert!(!self.is_leaf(), "Leaf has no children");

        let mid = self.midpoint();
        (Span::new(self.left, mid), Span::new(mid + 1, self.right))
    }

    /// Levels below this span down to its deepest leaf
    ///
    /// Left children are never shorter than right ones, so the leftmost path
    /// is the longest: depth = ⌈log2(len)⌉.
    pub fn depth_to_leaf(&self) -> usize {
        let mut span = *self;
        let mut depth = 0;

        while !span.is_leaf() {
            span = span.children().0;
            depth += 1;
        }

        depth
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "[{}]", self.left)
        } else {
            write!(f, "[{}, {}]", self.left, self.right)
        }
    }
}
