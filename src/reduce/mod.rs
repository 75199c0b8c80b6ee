//! Reduction operators
//!
//! A reducer folds two aggregates into one. Hierarchical pre-aggregation is
//! only valid when the reducer is:
//!   associative:  reduce(reduce(a, b), c) = reduce(a, reduce(b, c))
//!   commutative:  reduce(a, b) = reduce(b, a)
//!   idempotent:   reduce(x, x) = x

mod op;

pub use op::ReduceOp;

use std::fmt;

/// Binary reduction over values of type `T`
///
/// Implementations must uphold the laws listed in the module docs; the
/// engines rely on them to split and recombine ranges freely.
pub trait Reducer<T> {
    /// Combine two aggregates, returning the winning value
    fn reduce(&self, a: T, b: T) -> T;

    /// Fold the reducer over a slice in index order
    ///
    /// Returns `None` for an empty slice, since no identity element is assumed.
    fn fold(&self, values: &[T]) -> Option<T>
    where
        T: Clone,
    {
        let (first, rest) = values.split_first()?;
        Some(
            rest.iter()
                .fold(first.clone(), |acc, value| self.reduce(acc, value.clone())),
        )
    }
}

impl<T, R: Reducer<T> + ?Sized> Reducer<T> for &R {
    fn reduce(&self, a: T, b: T) -> T {
        (**self).reduce(a, b)
    }
}

/// Adapts a closure into a [`Reducer`]
///
/// The caller vouches for the algebraic laws; nothing here can check them.
#[derive(Clone, Copy)]
pub struct FnReducer<F>(pub F);

impl<T, F> Reducer<T> for FnReducer<F>
where
    F: Fn(T, T) -> T,
{
    fn reduce(&self, a: T, b: T) -> T {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnReducer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnReducer(..)")
    }
}
