// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;

use crate::error::GapVecError;
use crate::gap_vec::GapVec;
use crate::zeroable::Zeroable;

/// Bounded cursor over the window `[begin, end)` of a [`GapVec`].
///
/// The window is fixed at creation and may reach into the zero-filled
/// region past `len()`. The cursor borrows the vector, so it cannot be
/// mutated while the cursor is alive.
///
/// # Example
///
/// ```rust
/// use gapvec::{GapVec, GapVecError};
///
/// fn example() -> Result<(), GapVecError> {
///     let mut vec = GapVec::<u8>::new(8);
///     for byte in 0u8..6 {
///         vec.push(byte)?;
///     }
///
///     let mut cursor = vec.cursor(2, 5).ok_or(GapVecError::OutOfRange)?;
///     while cursor.has_next() {
///         let byte = cursor.get_next()?;
///         assert!((2..5).contains(byte));
///     }
///     assert_eq!(cursor.get_next(), Err(GapVecError::Exhausted));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T>
where
    T: Zeroable,
{
    vec: &'a GapVec<T>,
    begin: usize,
    end: usize,
    current: usize,
}

impl<T> Clone for Cursor<'_, T>
where
    T: Zeroable,
{
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Cursor<'a, T>
where
    T: Zeroable,
{
    pub(crate) fn new(vec: &'a GapVec<T>, begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end && end <= vec.capacity());

        Self {
            vec,
            begin,
            end,
            current: begin,
        }
    }

    /// First index of the window.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// One past the last index of the window.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Index the next call to [`get_next`](Self::get_next) reads.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Returns `true` if [`get_next`](Self::get_next) will succeed.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.begin <= self.current && self.current < self.end
    }

    /// Advances and returns the element at the pre-advance position.
    ///
    /// # Errors
    ///
    /// Returns [`GapVecError::Exhausted`] once the window is consumed.
    pub fn get_next(&mut self) -> Result<&'a T, GapVecError> {
        if !self.has_next() {
            return Err(GapVecError::Exhausted);
        }

        self.current += 1;
        self.vec.get_ref(self.current - 1)
    }

    /// Rewinds to `begin`.
    pub fn reset(&mut self) {
        self.current = self.begin;
    }
}

impl<'a, T> Iterator for Cursor<'a, T>
where
    T: Zeroable,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.get_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> where T: Zeroable {}

impl<T> FusedIterator for Cursor<'_, T> where T: Zeroable {}
