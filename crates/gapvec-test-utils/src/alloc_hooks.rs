// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;

use gapvec_policy::{Allocate, Deallocate, SystemAllocator, SystemDeallocator};

/// Failure script for a [`ScriptedAllocator`].
///
/// The behaviour is sticky: once set, it remains active until changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AllocBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every allocation fails.
    FailAlways,
    /// The given number of allocations succeed, every later one fails.
    FailAfter(usize),
}

/// System-backed allocator that counts successes and can be told to fail.
#[derive(Debug, Default)]
pub struct ScriptedAllocator {
    behaviour: Cell<AllocBehaviour>,
    allocations: Cell<usize>,
    bytes: Cell<usize>,
}

impl ScriptedAllocator {
    /// Creates an allocator with [`AllocBehaviour::None`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the failure script.
    pub fn change_behaviour(&self, behaviour: AllocBehaviour) {
        self.behaviour.set(behaviour);
    }

    /// Number of allocations that succeeded.
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    /// Total bytes handed out by successful allocations.
    pub fn bytes(&self) -> usize {
        self.bytes.get()
    }

    fn should_fail(&self) -> bool {
        match self.behaviour.get() {
            AllocBehaviour::None => false,
            AllocBehaviour::FailAlways => true,
            AllocBehaviour::FailAfter(0) => true,
            AllocBehaviour::FailAfter(n) => {
                self.behaviour.set(AllocBehaviour::FailAfter(n - 1));
                false
            }
        }
    }
}

impl Allocate for ScriptedAllocator {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if self.should_fail() {
            return None;
        }

        let ptr = SystemAllocator.allocate(layout)?;
        self.allocations.set(self.allocations.get() + 1);
        self.bytes.set(self.bytes.get() + layout.size());
        Some(ptr)
    }
}

/// System-backed deallocator that counts releases.
#[derive(Debug, Default)]
pub struct CountingDeallocator {
    releases: Cell<usize>,
    bytes: Cell<usize>,
}

impl CountingDeallocator {
    /// Creates a deallocator with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of releases performed.
    pub fn releases(&self) -> usize {
        self.releases.get()
    }

    /// Total bytes released.
    pub fn bytes(&self) -> usize {
        self.bytes.get()
    }
}

impl Deallocate for CountingDeallocator {
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.releases.set(self.releases.get() + 1);
        self.bytes.set(self.bytes.get() + layout.size());

        // SAFETY: forwarded to the caller.
        unsafe { SystemDeallocator.deallocate(ptr, layout) }
    }
}
