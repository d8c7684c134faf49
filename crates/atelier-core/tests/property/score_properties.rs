//! Property tests for the `Score` newtype.

use atelier_core::Score;
use proptest::prelude::*;

fn any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -2.0f64..3.0,
    ]
}

proptest! {
    #[test]
    fn new_stays_in_unit_interval(x in any_f64()) {
        let v = Score::new(x).value();
        prop_assert!((0.0..=1.0).contains(&v), "Score::new({}) = {}", x, v);
    }

    #[test]
    fn in_range_values_are_kept(x in 0.0f64..=1.0) {
        prop_assert_eq!(Score::new(x).value(), x);
    }

    #[test]
    fn mean_stays_in_unit_interval(xs in prop::collection::vec(any_f64(), 0..32)) {
        let m = Score::mean(xs.iter().map(|x| Score::new(*x))).value();
        prop_assert!((0.0..=1.0).contains(&m), "mean = {}", m);
    }
}
