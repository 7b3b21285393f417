// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::alloc::Layout;
use core::cell::RefCell;
use core::ptr::NonNull;

use crate::growth::PowerOfTwo;
use crate::system::{SystemAllocator, SystemDeallocator};
use crate::traits::{Allocate, Deallocate, Grow};

/// Allocation and growth hooks shared by one or more vectors.
///
/// Hooks are stored behind `RefCell` so they can be swapped through a
/// shared `Rc<Policy>`. Every setter returns the hook it replaced, which
/// lets callers restore it later.
///
/// A `Policy` is neither `Send` nor `Sync`.
///
/// # Example
///
/// ```rust
/// use std::alloc::Layout;
/// use std::ptr::NonNull;
/// use std::rc::Rc;
///
/// use gapvec_policy::Policy;
///
/// let policy = Policy::new();
///
/// let failing = Rc::new(|_: Layout| -> Option<NonNull<u8>> { None });
/// let system = policy.set_allocator(failing);
///
/// assert!(policy.allocate(Layout::new::<u64>()).is_none());
///
/// policy.set_allocator(system);
/// ```
pub struct Policy {
    allocator: RefCell<Rc<dyn Allocate>>,
    deallocator: RefCell<Rc<dyn Deallocate>>,
    growth: RefCell<Rc<dyn Grow>>,
}

impl core::fmt::Debug for Policy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Policy").finish_non_exhaustive()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy {
    /// Creates a policy with the global allocator and power-of-two growth.
    pub fn new() -> Self {
        Self {
            allocator: RefCell::new(Rc::new(SystemAllocator)),
            deallocator: RefCell::new(Rc::new(SystemDeallocator)),
            growth: RefCell::new(Rc::new(PowerOfTwo)),
        }
    }

    /// Starts a [`PolicyBuilder`] seeded with the defaults.
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Returns the current allocation hook.
    pub fn allocator(&self) -> Rc<dyn Allocate> {
        Rc::clone(&self.allocator.borrow())
    }

    /// Returns the current release hook.
    pub fn deallocator(&self) -> Rc<dyn Deallocate> {
        Rc::clone(&self.deallocator.borrow())
    }

    /// Returns the current growth hook.
    pub fn growth(&self) -> Rc<dyn Grow> {
        Rc::clone(&self.growth.borrow())
    }

    /// Installs `allocator` and returns the previous one.
    pub fn set_allocator(&self, allocator: Rc<dyn Allocate>) -> Rc<dyn Allocate> {
        log::debug!("gapvec policy: allocator replaced");
        self.allocator.replace(allocator)
    }

    /// Installs `deallocator` and returns the previous one.
    ///
    /// Buffers that are still alive will be released by the new hook, so it
    /// must be able to release whatever the current allocator handed out.
    pub fn set_deallocator(&self, deallocator: Rc<dyn Deallocate>) -> Rc<dyn Deallocate> {
        log::debug!("gapvec policy: deallocator replaced");
        self.deallocator.replace(deallocator)
    }

    /// Installs `growth` and returns the previous one.
    pub fn set_growth(&self, growth: Rc<dyn Grow>) -> Rc<dyn Grow> {
        log::debug!("gapvec policy: growth replaced");
        self.growth.replace(growth)
    }

    /// Allocates through the current hook.
    ///
    /// The hook is cloned out of its cell before the call, so it may swap
    /// hooks on this same policy.
    #[inline]
    pub fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        self.allocator().allocate(layout)
    }

    /// Releases through the current hook.
    ///
    /// # Safety
    ///
    /// Same contract as [`Deallocate::deallocate`].
    #[inline]
    pub unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        let deallocator = self.deallocator();
        // SAFETY: forwarded to the caller.
        unsafe { deallocator.deallocate(ptr, layout) }
    }

    /// Asks the current growth hook for the capacity following `current`.
    #[inline]
    pub fn grow(&self, current: usize) -> usize {
        self.growth().grow(current)
    }
}

/// Builds a [`Policy`] with some hooks replaced up front.
///
/// ```rust
/// use std::rc::Rc;
///
/// use gapvec_policy::Policy;
///
/// let policy = Policy::builder().growth(Rc::new(|n: usize| n + 1)).build();
/// assert_eq!(policy.grow(7), 8);
/// ```
#[derive(Debug, Default)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    /// Replaces the allocation hook.
    pub fn allocator(self, allocator: Rc<dyn Allocate>) -> Self {
        self.policy.allocator.replace(allocator);
        self
    }

    /// Replaces the release hook.
    pub fn deallocator(self, deallocator: Rc<dyn Deallocate>) -> Self {
        self.policy.deallocator.replace(deallocator);
        self
    }

    /// Replaces the growth hook.
    pub fn growth(self, growth: Rc<dyn Grow>) -> Self {
        self.policy.growth.replace(growth);
        self
    }

    /// Finishes the policy.
    pub fn build(self) -> Policy {
        self.policy
    }
}
