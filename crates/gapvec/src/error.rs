// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for gapvec.
use thiserror::Error;

/// Errors returned by [`GapVec`](crate::GapVec) and [`Cursor`](crate::Cursor) operations.
///
/// A failed operation leaves the vector exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GapVecError {
    /// Index outside the bound of the operation (capacity for `get`/`erase`,
    /// logical size for `pop`).
    #[error("index out of range")]
    OutOfRange,

    /// Request that can never be satisfied, such as reserving zero slots.
    #[error("invalid request")]
    Invalid,

    /// The growth policy did not produce a larger capacity.
    #[error("vector has reached the maximum growth allowed by its policy")]
    Maxed,

    /// Mutation attempted on a frozen vector.
    #[error("vector is immutable")]
    Immutable,

    /// The allocation hook returned no memory.
    #[error("memory allocation failed")]
    OutOfMemory,

    /// The cursor has no more elements in its window.
    #[error("iterator exhausted")]
    Exhausted,
}

impl GapVecError {
    /// Stable integer code of the error.
    ///
    /// Success is `0` and every error is negative, which keeps the codes
    /// usable from status-code based callers.
    pub fn code(self) -> i32 {
        match self {
            Self::OutOfRange => -1,
            Self::Invalid => -2,
            Self::Maxed => -3,
            Self::Immutable => -4,
            Self::OutOfMemory => -5,
            Self::Exhausted => -6,
        }
    }
}
