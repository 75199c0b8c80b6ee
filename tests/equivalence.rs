//! Cross-checks: the segment tree must answer exactly like the brute-force oracle

mod common;

use common::{assert_engines_agree, init_tracing};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangeagg::{create, EngineKind, RangeEngine, ReduceOp};

#[test]
fn full_cross_check_after_every_update() -> anyhow::Result<()> {
    init_tracing();
    const N: usize = 100;
    const UPDATES: usize = 200;

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    for op in ReduceOp::ALL {
        let mut fast = create("fast", op.name(), &values, N)?;
        let mut slow = create("slow", op.name(), &values, N)?;
        assert_engines_agree(&slow, &fast);

        for _ in 0..UPDATES {
            let value: i32 = rng.gen();
            let pos = rng.gen_range(0..N);
            slow.update(pos, value)?;
            fast.update(pos, value)?;
            assert_engines_agree(&slow, &fast);
        }
    }
    Ok(())
}

#[test]
fn every_kind_and_operator_combination_builds() -> anyhow::Result<()> {
    let values = [2u64, 7, 1, 8, 2, 8];
    for kind in EngineKind::ALL {
        for op in ReduceOp::ALL {
            let engine = create(kind.name(), op.name(), &values, values.len())?;
            assert_eq!(engine.kind(), kind);
            assert_eq!(engine.operator(), op);
            assert_eq!(engine.len(), values.len());
        }
    }
    Ok(())
}

fn op_strategy() -> impl Strategy<Value = ReduceOp> {
    prop_oneof![Just(ReduceOp::Min), Just(ReduceOp::Max)]
}

/// Array plus a sequence of in-bounds `(pos, value)` updates
fn array_and_updates() -> impl Strategy<Value = (Vec<i64>, Vec<(usize, i64)>)> {
    proptest::collection::vec(any::<i64>(), 1..48).prop_flat_map(|values| {
        let len = values.len();
        let updates = proptest::collection::vec((0..len, any::<i64>()), 0..32);
        (Just(values), updates)
    })
}

proptest! {
    #[test]
    fn tree_matches_reference_under_updates(
        (values, updates) in array_and_updates(),
        op in op_strategy(),
    ) {
        let mut fast = create("fast", op.name(), &values, values.len()).expect("tree builds");
        let mut slow = create("slow", op.name(), &values, values.len()).expect("reference builds");

        for (pos, value) in updates {
            fast.update(pos, value).expect("tree update");
            slow.update(pos, value).expect("reference update");
        }

        for i in 0..values.len() {
            for j in i..values.len() {
                prop_assert_eq!(
                    fast.query(i, j).expect("tree query"),
                    slow.query(i, j).expect("reference query"),
                    "ranges diverged at [{}, {}]", i, j
                );
            }
        }
    }

    #[test]
    fn engines_reject_the_same_bad_indices(
        len in 1usize..16,
        left in 0usize..24,
        right in 0usize..24,
        op in op_strategy(),
    ) {
        let values: Vec<i32> = (0..len as i32).collect();
        let mut fast = create("fast", op.name(), &values, len).expect("tree builds");
        let mut slow = create("slow", op.name(), &values, len).expect("reference builds");

        prop_assert_eq!(fast.query(left, right), slow.query(left, right));
        prop_assert_eq!(fast.update(left, 0), slow.update(left, 0));
    }
}
