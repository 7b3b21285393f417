// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Default hooks backed by the global allocator.
use core::alloc::Layout;
use core::ptr::NonNull;

use crate::traits::{Allocate, Deallocate};

/// Allocates through the global allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemAllocator;

/// Releases through the global allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemDeallocator;

impl Allocate for SystemAllocator {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return NonNull::new(core::ptr::without_provenance_mut(layout.align()));
        }

        // SAFETY: layout has a non-zero size.
        NonNull::new(unsafe { alloc::alloc::alloc(layout) })
    }
}

impl Deallocate for SystemDeallocator {
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return;
        }

        // SAFETY: forwarded to the caller.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
