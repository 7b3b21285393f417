// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable vector with capacity-bound indexing, gap-fill inserts and
//! pluggable allocation and growth policies.
//!
//! `GapVec<T>` keeps two counters apart: `capacity` (allocated slots) and
//! `len` (logically present elements). Indexed access is checked against
//! capacity, not length:
//!
//! - reading a slot in `[len, capacity)` returns the zero value,
//! - inserting at `idx >= len` makes every slot up to `idx` part of the
//!   vector (gaps become zero-valued elements),
//! - erasing an element in the middle leaves a zero-valued gap; only erasing
//!   the last element shortens the vector.
//!
//! Element types implement [`Zeroable`]: their all-zero value is valid and
//! owns nothing.
//!
//! # Core Guarantees
//!
//! - **Policy driven growth**: every allocation, release and growth decision
//!   goes through a shared [`Policy`], read at call time.
//! - **Strong failure guarantee**: a failed operation leaves length, capacity
//!   and contents untouched. The old buffer is released only after the new
//!   one has been allocated.
//! - **Freezing**: [`GapVec::make_immutable`] shrinks the buffer to the
//!   exact length and rejects any further mutation.
//!
//! # Example: Growth Policy
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use gapvec::{GapVec, GapVecError, Policy};
//!
//! fn example() -> Result<(), GapVecError> {
//!     let policy = Rc::new(Policy::new());
//!     let mut vec = GapVec::<u64>::new_in(0, &policy);
//!
//!     vec.push(1)?;
//!     assert_eq!(vec.capacity(), 1);
//!     vec.push(2)?;
//!     assert_eq!(vec.capacity(), 2);
//!     vec.push(3)?;
//!     assert_eq!(vec.capacity(), 4);
//!
//!     // Swapping the hook affects the very next growth.
//!     policy.set_growth(Rc::new(|n: usize| n + 100));
//!     vec.insert(4, 5)?;
//!     assert_eq!(vec.capacity(), 104);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to get fault-injecting hooks under
//! `gapvec::test_utils`:
//!
//! ```toml
//! [dev-dependencies]
//! gapvec = { version = "*", features = ["test-utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cursor;
mod error;
mod gap_vec;
mod zeroable;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::GapVecError;
pub use gap_vec::GapVec;
pub use zeroable::Zeroable;

pub use gapvec_policy::{
    Allocate, Deallocate, Grow, Policy, PolicyBuilder, PowerOfTwo, SystemAllocator,
    SystemDeallocator, next_power_of_two_above,
};

#[cfg(feature = "test-utils")]
pub use gapvec_test_utils as test_utils;
