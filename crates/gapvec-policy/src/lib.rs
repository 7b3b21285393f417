// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pluggable allocation and growth policies for `gapvec`.
//!
//! A [`Policy`] bundles three hooks that a vector consults on every
//! capacity decision:
//!
//! - an [`Allocate`] hook that hands out raw buffers,
//! - a [`Deallocate`] hook that releases them,
//! - a [`Grow`] hook that maps a size to the next capacity.
//!
//! Policies are shared through `Rc<Policy>` and read at call time, so
//! swapping a hook takes effect on the very next growth of every vector
//! holding that policy.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use gapvec_policy::Policy;
//!
//! let policy = Policy::new();
//! assert_eq!(policy.grow(10), 16);
//!
//! // Linear growth by 4 slots.
//! let previous = policy.set_growth(Rc::new(|n: usize| n + 4));
//! assert_eq!(policy.grow(10), 14);
//!
//! // Restore the default.
//! policy.set_growth(previous);
//! assert_eq!(policy.grow(16), 32);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod growth;
mod policy;
mod system;
mod traits;

#[cfg(test)]
mod tests;

pub use growth::{PowerOfTwo, next_power_of_two_above};
pub use policy::{Policy, PolicyBuilder};
pub use system::{SystemAllocator, SystemDeallocator};
pub use traits::{Allocate, Deallocate, Grow};
