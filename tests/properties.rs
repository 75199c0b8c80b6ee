//! Algebraic properties every engine must satisfy

use proptest::prelude::*;
use rangeagg::{EngineConfig, EngineKind, RangeEngine, ReduceOp, Reducer};

fn config_strategy() -> impl Strategy<Value = EngineConfig> {
    (
        prop_oneof![Just(EngineKind::Tree), Just(EngineKind::Reference)],
        prop_oneof![Just(ReduceOp::Min), Just(ReduceOp::Max)],
    )
        .prop_map(|(kind, op)| EngineConfig::new(kind, op))
}

fn values_strategy() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-1000i32..1000, 1..40)
}

proptest! {
    #[test]
    fn full_range_equals_fold(values in values_strategy(), config in config_strategy()) {
        let engine = config.build(&values).expect("engine builds");
        let expected = config.op.fold(&values[..]).expect("non-empty");
        prop_assert_eq!(engine.query(0, values.len() - 1).unwrap(), expected);
    }

    #[test]
    fn self_range_returns_current_value(
        values in values_strategy(),
        config in config_strategy(),
        overwrite in any::<i32>(),
    ) {
        let mut engine = config.build(&values).expect("engine builds");
        for (k, &value) in values.iter().enumerate() {
            prop_assert_eq!(engine.query(k, k).unwrap(), value);
        }

        let last = values.len() - 1;
        engine.update(last, overwrite).unwrap();
        prop_assert_eq!(engine.query(last, last).unwrap(), overwrite);
    }

    #[test]
    fn update_only_affects_ranges_containing_it(
        values in values_strategy(),
        config in config_strategy(),
        pos_seed in any::<prop::sample::Index>(),
        value in -2000i32..2000,
    ) {
        let n = values.len();
        let pos = pos_seed.index(n);
        let mut engine = config.build(&values).expect("engine builds");
        let before: Vec<Vec<i32>> = (0..n)
            .map(|i| (i..n).map(|j| engine.query(i, j).unwrap()).collect())
            .collect();

        engine.update(pos, value).unwrap();

        let mut current = values.clone();
        current[pos] = value;
        for i in 0..n {
            for j in i..n {
                let got = engine.query(i, j).unwrap();
                if i <= pos && pos <= j {
                    let expected = config.op.fold(&current[i..=j]).unwrap();
                    prop_assert_eq!(got, expected, "range [{}, {}] misses update", i, j);
                } else {
                    prop_assert_eq!(got, before[i][j - i], "range [{}, {}] changed", i, j);
                }
            }
        }
    }

    #[test]
    fn ranges_decompose_at_any_split(
        values in proptest::collection::vec(any::<i32>(), 2..40),
        config in config_strategy(),
    ) {
        let engine = config.build(&values).expect("engine builds");
        let n = values.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let whole = engine.query(i, j).unwrap();
                for m in i..j {
                    let split = config
                        .op
                        .reduce(engine.query(i, m).unwrap(), engine.query(m + 1, j).unwrap());
                    prop_assert_eq!(whole, split, "[{}, {}] split at {}", i, j, m);
                }
            }
        }
    }
}
