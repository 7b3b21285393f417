// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{GapVec, GapVecError};

fn sequence(capacity: usize, len: u32) -> GapVec<u32> {
    let mut vec = GapVec::new(capacity);
    for value in 0..len {
        vec.push(value).expect("Failed to push(..)");
    }
    vec
}

// =============================================================================
// cursor()
// =============================================================================

#[test]
fn test_cursor_window() {
    let vec = sequence(5, 5);
    let mut cursor = vec.cursor(2, 5).expect("Failed to cursor(..)");

    let mut seen = Vec::new();
    for _ in 0..3 {
        assert!(cursor.has_next());
        seen.push(*cursor.get_next().expect("Failed to get_next()"));
    }

    assert_eq!(seen, vec![2, 3, 4]);
    assert!(!cursor.has_next());
    assert_eq!(cursor.get_next(), Err(GapVecError::Exhausted));
}

#[test]
fn test_cursor_rejects_bad_windows() {
    let vec = sequence(4, 2);

    assert!(vec.cursor(3, 2).is_none());
    assert!(vec.cursor(0, 5).is_none());
    assert!(vec.cursor(5, 5).is_none());
}

#[test]
fn test_cursor_accepts_full_and_empty_windows() {
    let vec = sequence(4, 2);

    assert!(vec.cursor(0, 4).is_some());

    let mut empty = vec.cursor(4, 4).expect("Failed to cursor(..)");
    assert!(!empty.has_next());
    assert_eq!(empty.get_next(), Err(GapVecError::Exhausted));
}

#[test]
fn test_cursor_on_zero_capacity() {
    let vec: GapVec<u32> = GapVec::new(0);

    let cursor = vec.cursor(0, 0).expect("Failed to cursor(..)");
    assert_eq!(cursor.count(), 0);
    assert!(vec.cursor(0, 1).is_none());
}

#[test]
fn test_cursor_reads_past_len() {
    let vec = sequence(6, 2);

    let values: Vec<u32> = vec
        .cursor(0, 6)
        .expect("Failed to cursor(..)")
        .copied()
        .collect();

    assert_eq!(values, vec![0, 1, 0, 0, 0, 0]);
}

// =============================================================================
// get_next() / reset()
// =============================================================================

#[test]
fn test_get_next_reads_pre_advance_index() {
    let vec = sequence(4, 4);
    let mut cursor = vec.cursor(1, 3).expect("Failed to cursor(..)");

    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.get_next(), Ok(&1));
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_reset_rewinds() {
    let vec = sequence(4, 4);
    let mut cursor = vec.cursor(1, 3).expect("Failed to cursor(..)");

    let first: Vec<u32> = cursor.by_ref().copied().collect();
    assert!(!cursor.has_next());

    cursor.reset();
    cursor.reset();

    assert_eq!(cursor.position(), cursor.begin());
    let second: Vec<u32> = cursor.copied().collect();
    assert_eq!(first, second);
    assert_eq!(second, vec![1, 2]);
}

// =============================================================================
// Iterator
// =============================================================================

#[test]
fn test_iter_covers_len_only() {
    let vec = sequence(8, 3);

    let mut iter = vec.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.end(), 3);

    iter.next();
    assert_eq!(iter.len(), 2);

    let rest: Vec<u32> = iter.copied().collect();
    assert_eq!(rest, vec![1, 2]);
}

#[test]
fn test_for_loop_over_reference() {
    let vec = sequence(4, 4);
    let mut sum = 0;

    for value in &vec {
        sum += value;
    }

    assert_eq!(sum, 6);
}

#[test]
fn test_cloned_cursor_is_independent() {
    let vec = sequence(4, 4);
    let mut cursor = vec.iter();
    cursor.next();

    let mut clone = cursor.clone();
    clone.next();

    assert_eq!(cursor.position(), 1);
    assert_eq!(clone.position(), 2);
}
