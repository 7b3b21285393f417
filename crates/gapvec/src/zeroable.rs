// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element types with a valid all-zero value.
use alloc::boxed::Box;
use core::marker::PhantomData;
use core::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Wrapping,
};
use core::ptr::NonNull;

/// Types whose all-zero bit pattern is a valid value that owns no resources.
///
/// Freshly allocated slots and erased slots of a [`GapVec`](crate::GapVec)
/// are zero-filled, and those slots can be read or absorbed as live
/// elements. Only types satisfying this contract may be stored.
///
/// # Safety
///
/// Implementors guarantee that:
/// - a value made of `size_of::<Self>()` zero bytes is a valid `Self`,
/// - dropping or forgetting such a value leaks nothing.
pub unsafe trait Zeroable {}

macro_rules! impl_zeroable {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: all-zero is a valid, resource-free value of this type.
            unsafe impl Zeroable for $ty {}
        )*
    };
}

impl_zeroable!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    Option<NonZeroU8>,
    Option<NonZeroU16>,
    Option<NonZeroU32>,
    Option<NonZeroU64>,
    Option<NonZeroU128>,
    Option<NonZeroUsize>,
    Option<NonZeroI8>,
    Option<NonZeroI16>,
    Option<NonZeroI32>,
    Option<NonZeroI64>,
    Option<NonZeroI128>,
    Option<NonZeroIsize>,
);

// SAFETY: zero is the null pointer.
unsafe impl<T> Zeroable for *const T {}
// SAFETY: zero is the null pointer.
unsafe impl<T> Zeroable for *mut T {}
// SAFETY: zero is `None`.
unsafe impl<T> Zeroable for Option<NonNull<T>> {}
// SAFETY: zero is `None`, which owns nothing.
unsafe impl<T> Zeroable for Option<Box<T>> {}
// SAFETY: zero-sized.
unsafe impl<T: ?Sized> Zeroable for PhantomData<T> {}
// SAFETY: transparent over a zeroable T.
unsafe impl<T: Zeroable> Zeroable for Wrapping<T> {}
// SAFETY: every element is zeroable.
unsafe impl<T: Zeroable, const N: usize> Zeroable for [T; N] {}

macro_rules! impl_zeroable_tuple {
    ($($name:ident),+) => {
        // SAFETY: every field is zeroable; padding bytes carry no validity.
        unsafe impl<$($name: Zeroable),+> Zeroable for ($($name,)+) {}
    };
}

impl_zeroable_tuple!(A);
impl_zeroable_tuple!(A, B);
impl_zeroable_tuple!(A, B, C);
impl_zeroable_tuple!(A, B, C, D);
