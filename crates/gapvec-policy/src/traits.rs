// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

/// Hook that hands out raw, uninitialized buffers.
///
/// Callers never request zero-sized layouts through a [`Policy`](crate::Policy).
pub trait Allocate {
    /// Allocates a block matching `layout`, or returns `None` on failure.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;
}

/// Hook that releases buffers obtained from an [`Allocate`] hook.
pub trait Deallocate {
    /// Releases `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by an allocator this deallocator is
    /// able to release, for the same `layout`, and must not be used
    /// afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// Hook mapping a current size to the next capacity to allocate.
///
/// Returning a value that is not larger than the current capacity is
/// allowed; the vector reports it as a maxed-out growth.
pub trait Grow {
    /// Returns the capacity that should follow `current`.
    fn grow(&self, current: usize) -> usize;
}

impl<F> Allocate for F
where
    F: Fn(Layout) -> Option<NonNull<u8>>,
{
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        self(layout)
    }
}

impl<F> Deallocate for F
where
    F: Fn(NonNull<u8>, Layout),
{
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self(ptr, layout)
    }
}

impl<F> Grow for F
where
    F: Fn(usize) -> usize,
{
    fn grow(&self, current: usize) -> usize {
        self(current)
    }
}
