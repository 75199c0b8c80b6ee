#![allow(dead_code)]

use rangeagg::RangeEngine;
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber honouring `RUST_LOG`
///
/// Safe to call from every test; only the first call in a binary wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert two engines agree on every range `[i, j]`
pub fn assert_engines_agree<T, A, B>(left: &A, right: &B)
where
    T: PartialEq + std::fmt::Debug,
    A: RangeEngine<T>,
    B: RangeEngine<T>,
{
    assert_eq!(left.len(), right.len(), "engine lengths differ");
    let len = left.len();
    for i in 0..len {
        for j in i..len {
            let expected = left.query(i, j).expect("left engine query");
            let actual = right.query(i, j).expect("right engine query");
            assert_eq!(
                expected,
                actual,
                "{} and {} disagree on [{i}, {j}]",
                left.kind(),
                right.kind()
            );
        }
    }
}
