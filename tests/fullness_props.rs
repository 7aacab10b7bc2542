//! Fullness rule properties

use docvault::tree::{is_full, Occupancy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn matches_ratio_threshold(load in 0u64..1_000_000, capacity in 1u32..1_000_000) {
        // 5 * load >= 4 * capacity, evaluated in exact arithmetic
        let expected = load as u128 * 5 >= capacity as u128 * 4;
        prop_assert_eq!(is_full(load, capacity), expected);
    }

    #[test]
    fn monotonic_in_load(load in 0u64..1_000_000, extra in 0u64..1_000, capacity in 1u32..100_000) {
        if is_full(load, capacity) {
            prop_assert!(is_full(load + extra, capacity));
        }
    }

    #[test]
    fn at_capacity_is_full(capacity in 1u32..u32::MAX) {
        prop_assert!(is_full(u64::from(capacity), capacity));
    }

    #[test]
    fn occupancy_agrees_with_rule(load in 0u64..10_000, capacity in 0u32..10_000) {
        let occupancy = Occupancy::new(load, capacity);
        prop_assert_eq!(occupancy.full, is_full(load, capacity));
        prop_assert_eq!(occupancy.to_string(), format!("{}/{}", load, capacity));
    }
}

#[test]
fn zero_capacity_is_always_full() {
    assert!(is_full(0, 0));
    assert!(is_full(7, 0));
}

#[test]
fn extreme_values_do_not_overflow() {
    assert!(is_full(u64::MAX, u32::MAX));
    assert!(!is_full(0, u32::MAX));
}
