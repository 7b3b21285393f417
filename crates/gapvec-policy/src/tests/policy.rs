// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::{Allocate, Grow, Policy, SystemAllocator};

// =============================================================================
// new() / default()
// =============================================================================

#[test]
fn test_default_growth_is_power_of_two() {
    let policy = Policy::default();

    assert_eq!(policy.grow(0), 1);
    assert_eq!(policy.grow(10), 16);
    assert_eq!(policy.grow(16), 32);
}

#[test]
fn test_default_allocator_allocates() {
    let policy = Policy::new();
    let layout = Layout::new::<u32>();

    let ptr = policy.allocate(layout).expect("Failed to allocate(..)");

    // SAFETY: ptr was allocated by this policy with the same layout.
    unsafe { policy.deallocate(ptr, layout) };
}

// =============================================================================
// getters / setters
// =============================================================================

#[test]
fn test_set_growth_returns_previous() {
    let policy = Policy::new();

    let previous = policy.set_growth(Rc::new(|n: usize| n + 3));
    assert_eq!(previous.grow(16), 32);
    assert_eq!(policy.grow(16), 19);

    let linear = policy.set_growth(previous);
    assert_eq!(linear.grow(1), 4);
    assert_eq!(policy.grow(16), 32);
}

#[test]
fn test_getter_does_not_replace() {
    let policy = Policy::new();
    policy.set_growth(Rc::new(|n: usize| n * 3 + 1));

    let current = policy.growth();
    assert_eq!(current.grow(2), 7);
    assert_eq!(policy.grow(2), 7);
}

#[test]
fn test_set_allocator_takes_effect_immediately() {
    let policy = Policy::new();
    let failing = Rc::new(|_: Layout| -> Option<NonNull<u8>> { None });

    let system = policy.set_allocator(failing);
    assert!(policy.allocate(Layout::new::<u8>()).is_none());

    policy.set_allocator(system);
    let layout = Layout::new::<u8>();
    let ptr = policy.allocate(layout).expect("Failed to allocate(..)");
    // SAFETY: ptr was allocated by this policy with the same layout.
    unsafe { policy.deallocate(ptr, layout) };
}

#[test]
fn test_set_deallocator_is_used() {
    let policy = Policy::new();
    let released = Rc::new(Cell::new(0usize));

    let counter = Rc::clone(&released);
    let previous = policy.set_deallocator(Rc::new(move |ptr: NonNull<u8>, layout: Layout| {
        counter.set(counter.get() + 1);
        // SAFETY: only fed pointers from the system allocator below.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) };
    }));

    let layout = Layout::new::<u64>();
    let ptr = SystemAllocator
        .allocate(layout)
        .expect("Failed to allocate(..)");
    // SAFETY: ptr was allocated by the system allocator with the same layout.
    unsafe { policy.deallocate(ptr, layout) };

    assert_eq!(released.get(), 1);

    policy.set_deallocator(previous);
}

#[test]
fn test_hook_may_swap_hooks_while_running() {
    let policy = Rc::new(Policy::new());

    let weak = Rc::downgrade(&policy);
    policy.set_growth(Rc::new(move |n: usize| {
        if let Some(policy) = weak.upgrade() {
            policy.set_growth(Rc::new(|m: usize| m + 100));
        }
        n + 1
    }));

    assert_eq!(policy.grow(1), 2);
    assert_eq!(policy.grow(1), 101);
}

// =============================================================================
// builder()
// =============================================================================

#[test]
fn test_builder_overrides() {
    let policy = Policy::builder()
        .growth(Rc::new(|n: usize| n + 2))
        .allocator(Rc::new(|_: Layout| -> Option<NonNull<u8>> { None }))
        .build();

    assert_eq!(policy.grow(4), 6);
    assert!(policy.allocate(Layout::new::<u8>()).is_none());
}

#[test]
fn test_builder_keeps_defaults() {
    let policy = Policy::builder().build();

    assert_eq!(policy.grow(10), 16);
}
