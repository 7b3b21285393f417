// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{Grow, PowerOfTwo, next_power_of_two_above};

// =============================================================================
// next_power_of_two_above()
// =============================================================================

#[test]
fn test_zero_grows_to_one() {
    assert_eq!(next_power_of_two_above(0), 1);
}

#[test]
fn test_powers_of_two_double() {
    assert_eq!(next_power_of_two_above(1), 2);
    assert_eq!(next_power_of_two_above(2), 4);
    assert_eq!(next_power_of_two_above(16), 32);
    assert_eq!(next_power_of_two_above(1 << 20), 1 << 21);
}

#[test]
fn test_non_powers_round_up() {
    assert_eq!(next_power_of_two_above(3), 4);
    assert_eq!(next_power_of_two_above(10), 16);
    assert_eq!(next_power_of_two_above(17), 32);
}

#[test]
fn test_saturates_at_usize_limit() {
    let top = 1usize << (usize::BITS - 1);

    assert_eq!(next_power_of_two_above(top), top);
    assert_eq!(next_power_of_two_above(top + 1), top + 1);
    assert_eq!(next_power_of_two_above(usize::MAX), usize::MAX);
}

// =============================================================================
// PowerOfTwo
// =============================================================================

#[test]
fn test_power_of_two_hook_matches_function() {
    for n in [0usize, 1, 5, 8, 100, 1024] {
        assert_eq!(PowerOfTwo.grow(n), next_power_of_two_above(n));
    }
}

proptest! {
    #[test]
    fn grows_strictly_to_a_power_of_two(n in 0usize..(1usize << (usize::BITS - 2))) {
        let next = next_power_of_two_above(n);

        prop_assert!(next > n);
        prop_assert!(next.is_power_of_two());
        // Smallest such power: half of it is not above n (except for n == 0).
        prop_assert!(n == 0 || next / 2 <= n);
    }
}
