// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::traits::Grow;

/// Default growth: the next power of two strictly above the input.
///
/// - `0 -> 1`
/// - a power of two doubles (`16 -> 32`)
/// - anything else rounds up (`10 -> 16`)
///
/// When no larger power of two fits in `usize` the input is returned
/// unchanged, which a vector reports as maxed out.
///
/// ```rust
/// use gapvec_policy::next_power_of_two_above;
///
/// assert_eq!(next_power_of_two_above(0), 1);
/// assert_eq!(next_power_of_two_above(1), 2);
/// assert_eq!(next_power_of_two_above(10), 16);
/// assert_eq!(next_power_of_two_above(16), 32);
/// ```
#[inline]
pub fn next_power_of_two_above(n: usize) -> usize {
    if n == 0 {
        return 1;
    }

    if n.is_power_of_two() {
        return n.checked_mul(2).unwrap_or(n);
    }

    n.checked_next_power_of_two().unwrap_or(n)
}

/// [`Grow`] hook wrapping [`next_power_of_two_above`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PowerOfTwo;

impl Grow for PowerOfTwo {
    #[inline]
    fn grow(&self, current: usize) -> usize {
        next_power_of_two_above(current)
    }
}
