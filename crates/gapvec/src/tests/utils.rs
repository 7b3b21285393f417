// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::RefCell;

use crate::Zeroable;

thread_local! {
    static DROPPED: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
}

/// Element that records its id when dropped. Id `0` is the zero value and
/// records nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Tracked(pub(crate) u32);

impl Drop for Tracked {
    fn drop(&mut self) {
        if self.0 != 0 {
            DROPPED.with(|dropped| dropped.borrow_mut().push(self.0));
        }
    }
}

// SAFETY: a zeroed Tracked is Tracked(0), which records nothing on drop.
unsafe impl Zeroable for Tracked {}

/// Returns and clears the ids dropped on this thread so far.
pub(crate) fn take_dropped() -> Vec<u32> {
    DROPPED.with(|dropped| core::mem::take(&mut *dropped.borrow_mut()))
}
