//! Property tests for the kernel's observable contract.

use csum_kernel::digest::result_digest;
use csum_kernel::sum::{sum, sum_counted};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1e9f64..1e9
}

proptest! {
    #[test]
    fn nan_anywhere_gives_nan(
        mut values in proptest::collection::vec(finite(), 0..32),
        pos in any::<prop::sample::Index>(),
    ) {
        let at = pos.index(values.len() + 1);
        values.insert(at, f64::NAN);
        prop_assert!(sum(&values).is_nan());
    }

    #[test]
    fn positive_infinity_dominates_finite(
        mut values in proptest::collection::vec(finite(), 0..32),
        pos in any::<prop::sample::Index>(),
    ) {
        let at = pos.index(values.len() + 1);
        values.insert(at, f64::INFINITY);
        prop_assert_eq!(sum(&values), f64::INFINITY);
    }

    #[test]
    fn both_infinities_give_nan(
        mut values in proptest::collection::vec(finite(), 0..32),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        values.insert(a.index(values.len() + 1), f64::INFINITY);
        values.insert(b.index(values.len() + 1), f64::NEG_INFINITY);
        prop_assert!(sum(&values).is_nan());
    }

    #[test]
    fn integer_sums_ignore_permutation(
        ints in proptest::collection::vec(-(1i64 << 40)..(1i64 << 40), 0..48),
        seed in any::<u64>(),
    ) {
        #[allow(clippy::cast_precision_loss)]
        let values: Vec<f64> = ints.iter().map(|&i| i as f64).collect();
        // Rotation is a cheap permutation derived from the seed.
        let mut permuted = values.clone();
        if !permuted.is_empty() {
            #[allow(clippy::cast_possible_truncation)]
            let k = (seed % permuted.len() as u64) as usize;
            permuted.rotate_left(k);
        }
        prop_assert_eq!(sum(&values), sum(&permuted));
    }

    #[test]
    fn repeated_calls_share_a_digest(values in proptest::collection::vec(any::<f64>(), 0..32)) {
        let first = sum(&values);
        let second = sum(&values);
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(result_digest(first), result_digest(second));
    }

    #[test]
    fn counted_agrees_with_plain(values in proptest::collection::vec(finite(), 0..32)) {
        let counted = sum_counted(values.len(), &values).unwrap();
        prop_assert_eq!(counted.to_bits(), sum(&values).to_bits());
    }
}
