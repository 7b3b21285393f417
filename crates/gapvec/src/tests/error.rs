// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::GapVecError;

#[test]
fn test_codes_are_stable() {
    assert_eq!(GapVecError::OutOfRange.code(), -1);
    assert_eq!(GapVecError::Invalid.code(), -2);
    assert_eq!(GapVecError::Maxed.code(), -3);
    assert_eq!(GapVecError::Immutable.code(), -4);
    assert_eq!(GapVecError::OutOfMemory.code(), -5);
    assert_eq!(GapVecError::Exhausted.code(), -6);
}

#[test]
fn test_display() {
    assert_eq!(GapVecError::Immutable.to_string(), "vector is immutable");
    assert_eq!(GapVecError::Exhausted.to_string(), "iterator exhausted");
    assert_eq!(
        GapVecError::Maxed.to_string(),
        "vector has reached the maximum growth allowed by its policy"
    );
}
