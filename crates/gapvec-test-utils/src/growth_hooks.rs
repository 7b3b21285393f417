// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::rc::Rc;

use gapvec_policy::{Grow, Policy};

use crate::alloc_hooks::{CountingDeallocator, ScriptedAllocator};

/// Growth hook that never makes progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StagnantGrowth;

impl Grow for StagnantGrowth {
    fn grow(&self, current: usize) -> usize {
        current
    }
}

/// Builds a default policy whose allocator and deallocator are observable.
///
/// Returns the shared policy together with handles to its hooks.
pub fn instrumented_policy() -> (Rc<Policy>, Rc<ScriptedAllocator>, Rc<CountingDeallocator>) {
    let allocator = Rc::new(ScriptedAllocator::new());
    let deallocator = Rc::new(CountingDeallocator::new());

    let policy = Policy::builder()
        .allocator(allocator.clone())
        .deallocator(deallocator.clone())
        .build();

    (Rc::new(policy), allocator, deallocator)
}
