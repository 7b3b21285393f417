// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for gapvec crates.
//!
//! Hooks in this crate plug into a [`Policy`] to inject allocation
//! failures, count allocations and releases, or stall growth.
//!
//! ```rust
//! use gapvec_test_utils::{AllocBehaviour, instrumented_policy};
//!
//! let (policy, allocator, deallocator) = instrumented_policy();
//! allocator.change_behaviour(AllocBehaviour::FailAlways);
//!
//! assert!(policy.allocate(core::alloc::Layout::new::<u8>()).is_none());
//! assert_eq!(allocator.allocations(), 0);
//! assert_eq!(deallocator.releases(), 0);
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

mod alloc_hooks;
mod growth_hooks;

pub use alloc_hooks::{AllocBehaviour, CountingDeallocator, ScriptedAllocator};
pub use growth_hooks::{StagnantGrowth, instrumented_policy};
