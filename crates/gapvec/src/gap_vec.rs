// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use gapvec_policy::Policy;

use crate::cursor::Cursor;
use crate::error::GapVecError;
use crate::zeroable::Zeroable;

/// Growable vector with capacity-bound indexing and gap-fill inserts.
///
/// Slots are split in two regions:
/// - `[0, len)`: logically present elements,
/// - `[len, capacity)`: allocated slots holding the zero value.
///
/// `get`, `insert` and `erase` accept any index below `capacity`, so the
/// zero region is readable and writable. Inserting past `len` absorbs the
/// slots in between as zero-valued elements.
///
/// Every allocation, release and growth decision goes through the shared
/// [`Policy`], read at call time.
///
/// # Example
///
/// ```rust
/// use gapvec::{GapVec, GapVecError};
///
/// fn example() -> Result<(), GapVecError> {
///     let mut vec = GapVec::<u32>::new(4);
///
///     vec.push(7)?;
///     vec.insert(3, 9)?;
///     assert_eq!(vec.as_slice(), &[7, 0, 0, 9]);
///
///     vec.make_immutable()?;
///     assert_eq!(vec.push(1), Err(GapVecError::Immutable));
///     assert_eq!(vec.get(3)?, 9);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GapVec<T>
where
    T: Zeroable,
{
    ptr: NonNull<T>,
    capacity: usize,
    len: usize,
    mutable: bool,
    policy: Rc<Policy>,
    _marker: PhantomData<T>,
}

impl<T> core::fmt::Debug for GapVec<T>
where
    T: Zeroable + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GapVec")
            .field("elements", &self.as_slice())
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("mutable", &self.mutable)
            .finish()
    }
}

impl<T> Default for GapVec<T>
where
    T: Zeroable,
{
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> GapVec<T>
where
    T: Zeroable,
{
    /// Allocates a zero-filled buffer of `layout` through `policy`.
    ///
    /// Zero-sized layouts never reach the allocator.
    fn allocate_zeroed(policy: &Policy, layout: Layout) -> Result<NonNull<T>, GapVecError> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        let raw = policy.allocate(layout).ok_or(GapVecError::OutOfMemory)?;

        // SAFETY: raw points to layout.size() writable bytes.
        unsafe { raw.as_ptr().write_bytes(0, layout.size()) };

        Ok(raw.cast())
    }

    /// Releases the current buffer through the policy.
    ///
    /// # Safety
    ///
    /// The buffer must not be used afterwards; `ptr` and `capacity` have to
    /// be replaced or the vector dropped.
    unsafe fn release_buffer(&mut self) {
        let Ok(layout) = Layout::array::<T>(self.capacity) else {
            return;
        };

        if layout.size() == 0 {
            return;
        }

        // SAFETY: the buffer was allocated through this policy with this layout.
        unsafe { self.policy.deallocate(self.ptr.cast(), layout) };
    }

    /// Moves the live prefix into a fresh zeroed buffer of `new_capacity` slots.
    ///
    /// The old buffer is only released once the new one exists.
    fn relocate(&mut self, new_capacity: usize, overflow: GapVecError) -> Result<(), GapVecError> {
        let layout = Layout::array::<T>(new_capacity).map_err(|_| overflow)?;
        let new_ptr = Self::allocate_zeroed(&self.policy, layout)?;

        // SAFETY: both buffers hold at least len slots and do not overlap. The
        // moved-from values are released as raw memory, never dropped.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            self.release_buffer();
        }

        self.ptr = new_ptr;
        self.capacity = new_capacity;

        Ok(())
    }

    /// Grows using `basis` as the policy input (`0` means current capacity).
    fn realloc(&mut self, basis: usize) -> Result<(), GapVecError> {
        let basis = if basis != 0 { basis } else { self.capacity };
        let candidate = self.policy.grow(basis);

        if candidate <= self.capacity {
            return Err(GapVecError::Maxed);
        }

        self.grow_to(candidate)
    }

    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, new_capacity: usize) -> Result<(), GapVecError> {
        let old_capacity = self.capacity;
        self.relocate(new_capacity, GapVecError::Maxed)?;

        log::trace!("gapvec: grew from {old_capacity} to {new_capacity} slots");
        Ok(())
    }

    /// Grows so that `idx` (at or past capacity) becomes addressable.
    ///
    /// Tries the size following the current capacity first and only asks
    /// for the size following `idx` when that one falls short.
    fn grow_for(&mut self, idx: usize) -> Result<(), GapVecError> {
        let mut candidate = self.policy.grow(self.capacity);

        if candidate <= idx {
            candidate = self.policy.grow(idx);
        }

        if candidate <= idx {
            return Err(GapVecError::Maxed);
        }

        self.grow_to(candidate)
    }

    /// # Safety
    ///
    /// `idx` must be below `capacity`.
    #[inline(always)]
    unsafe fn slot(&self, idx: usize) -> *mut T {
        // SAFETY: forwarded to the caller.
        unsafe { self.ptr.as_ptr().add(idx) }
    }

    /// Creates a vector with `capacity` zero-filled slots using `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`GapVecError::OutOfMemory`] if the allocator fails or the
    /// requested size overflows.
    pub fn try_new_in(capacity: usize, policy: &Rc<Policy>) -> Result<Self, GapVecError> {
        let layout = Layout::array::<T>(capacity).map_err(|_| GapVecError::OutOfMemory)?;
        let ptr = Self::allocate_zeroed(policy, layout)?;

        Ok(Self {
            ptr,
            capacity,
            len: 0,
            mutable: true,
            policy: Rc::clone(policy),
            _marker: PhantomData,
        })
    }

    /// Creates a vector with `capacity` zero-filled slots and its own default policy.
    ///
    /// # Errors
    ///
    /// Returns [`GapVecError::OutOfMemory`] if the allocation fails.
    pub fn try_new(capacity: usize) -> Result<Self, GapVecError> {
        Self::try_new_in(capacity, &Rc::new(Policy::new()))
    }

    /// Like [`try_new_in`](Self::try_new_in), aborting through
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on failure.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` slots of `T` overflow `isize::MAX` bytes.
    pub fn new_in(capacity: usize, policy: &Rc<Policy>) -> Self {
        match Self::try_new_in(capacity, policy) {
            Ok(vec) => vec,
            Err(_) => match Layout::array::<T>(capacity) {
                Ok(layout) => alloc::alloc::handle_alloc_error(layout),
                Err(_) => panic!("gapvec: capacity overflow"),
            },
        }
    }

    /// Creates a vector with `capacity` zero-filled slots and its own default policy.
    ///
    /// # Panics
    ///
    /// Same as [`new_in`](Self::new_in).
    pub fn new(capacity: usize) -> Self {
        Self::new_in(capacity, &Rc::new(Policy::new()))
    }

    /// Returns the policy this vector allocates and grows with.
    pub fn policy(&self) -> &Rc<Policy> {
        &self.policy
    }

    /// Returns the number of logically present elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if no element is logically present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `false` once the vector has been frozen.
    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Grows the buffer to `policy.grow(at_least)` slots.
    ///
    /// The new capacity comes from the growth policy, so it may exceed
    /// `at_least`. Existing elements are preserved.
    ///
    /// # Errors
    ///
    /// - [`GapVecError::Invalid`] if `at_least` is zero.
    /// - [`GapVecError::Immutable`] if the vector is frozen.
    /// - [`GapVecError::Maxed`] if the policy's answer does not exceed the
    ///   current capacity.
    /// - [`GapVecError::OutOfMemory`] if the allocation fails.
    pub fn reserve(&mut self, at_least: usize) -> Result<(), GapVecError> {
        if at_least == 0 {
            return Err(GapVecError::Invalid);
        }

        if !self.mutable {
            return Err(GapVecError::Immutable);
        }

        self.realloc(at_least)
    }

    /// Shrinks the capacity to exactly `len()` and freezes the vector.
    ///
    /// Same as `fit(true)`.
    pub fn make_immutable(&mut self) -> Result<(), GapVecError> {
        self.fit(true)
    }

    /// Shrinks the capacity to exactly `len()`.
    ///
    /// Afterwards the vector is frozen if `freeze` is `true` and mutable
    /// otherwise, whether or not a reallocation happened. This also means
    /// `fit(false)` thaws a frozen vector.
    ///
    /// # Errors
    ///
    /// Returns [`GapVecError::OutOfMemory`] if the smaller buffer cannot be
    /// allocated; the vector is left untouched.
    pub fn fit(&mut self, freeze: bool) -> Result<(), GapVecError> {
        if self.len < self.capacity {
            let old_capacity = self.capacity;
            self.relocate(self.len, GapVecError::OutOfMemory)?;

            log::trace!("gapvec: shrunk from {old_capacity} to {} slots", self.len);
        }

        self.mutable = !freeze;

        Ok(())
    }

    /// Returns a reference to the slot at `idx`.
    ///
    /// Any `idx < capacity()` is accepted; slots past `len()` hold the zero value.
    ///
    /// # Errors
    ///
    /// Returns [`GapVecError::OutOfRange`] if `idx >= capacity()`.
    pub fn get_ref(&self, idx: usize) -> Result<&T, GapVecError> {
        if idx >= self.capacity {
            return Err(GapVecError::OutOfRange);
        }

        // SAFETY: idx < capacity and every slot holds a valid value.
        Ok(unsafe { &*self.slot(idx) })
    }

    /// Returns a copy of the slot at `idx`.
    ///
    /// # Errors
    ///
    /// Same as [`get_ref`](Self::get_ref).
    pub fn get(&self, idx: usize) -> Result<T, GapVecError>
    where
        T: Clone,
    {
        self.get_ref(idx).cloned()
    }

    /// Stores `value` at `idx`, growing the buffer if `idx >= capacity()`.
    ///
    /// A live element at `idx` is replaced and dropped. When `idx >= len()`,
    /// `len()` becomes `idx + 1` and any slots skipped over become
    /// zero-valued elements.
    ///
    /// Growth asks the policy for the capacity following `capacity()`, or
    /// the one following `idx` if the former does not reach `idx`. Either
    /// way a single reallocation happens.
    ///
    /// # Errors
    ///
    /// - [`GapVecError::Immutable`] if the vector is frozen.
    /// - [`GapVecError::Maxed`] if the policy cannot make `idx` addressable.
    /// - [`GapVecError::OutOfMemory`] if the allocation fails.
    pub fn insert(&mut self, idx: usize, value: T) -> Result<(), GapVecError> {
        if !self.mutable {
            return Err(GapVecError::Immutable);
        }

        if idx >= self.capacity {
            self.grow_for(idx)?;
        }

        // SAFETY: idx < capacity after growth.
        let slot = unsafe { self.slot(idx) };

        if idx < self.len {
            // SAFETY: idx < len, the slot holds a live value.
            let old = unsafe { ptr::replace(slot, value) };
            drop(old);
        } else {
            // SAFETY: idx < capacity; the zero value in the slot owns nothing.
            unsafe { ptr::write(slot, value) };
            self.len = idx + 1;
        }

        Ok(())
    }

    /// Appends `value` after the last element. Same as `insert(len(), value)`.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    pub fn push(&mut self, value: T) -> Result<(), GapVecError> {
        self.insert(self.len, value)
    }

    /// Zero-fills the slot at `idx`, dropping a live element.
    ///
    /// `len()` shrinks by one only when `idx` is the last element; anywhere
    /// else the slot stays inside `[0, len)` as a zero-valued gap.
    ///
    /// # Errors
    ///
    /// - [`GapVecError::Immutable`] if the vector is frozen.
    /// - [`GapVecError::OutOfRange`] if `idx >= capacity()`.
    pub fn erase(&mut self, idx: usize) -> Result<(), GapVecError> {
        if !self.mutable {
            return Err(GapVecError::Immutable);
        }

        if idx >= self.capacity {
            return Err(GapVecError::OutOfRange);
        }

        // SAFETY: idx < capacity.
        let slot = unsafe { self.slot(idx) };

        // SAFETY: idx < len, the slot holds a live value that is moved out once.
        let old = (idx < self.len).then(|| unsafe { ptr::read(slot) });

        // SAFETY: idx < capacity.
        unsafe { ptr::write_bytes(slot, 0, 1) };

        if idx + 1 == self.len {
            self.len -= 1;
        }

        drop(old);

        Ok(())
    }

    /// Removes and returns the last element, zero-filling its slot.
    ///
    /// # Errors
    ///
    /// - [`GapVecError::Immutable`] if the vector is frozen.
    /// - [`GapVecError::OutOfRange`] if the vector is empty.
    pub fn pop(&mut self) -> Result<T, GapVecError> {
        if !self.mutable {
            return Err(GapVecError::Immutable);
        }

        if self.len == 0 {
            return Err(GapVecError::OutOfRange);
        }

        let idx = self.len - 1;
        // SAFETY: idx < len <= capacity.
        let slot = unsafe { self.slot(idx) };

        // SAFETY: idx < len; the value is moved out and the slot re-zeroed.
        let value = unsafe {
            let value = ptr::read(slot);
            ptr::write_bytes(slot, 0, 1);
            value
        };

        self.len = idx;

        Ok(value)
    }

    /// Returns the logically present elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first len slots are initialized.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns every allocated slot, including the zero-filled tail.
    pub fn as_capacity_slice(&self) -> &[T] {
        // SAFETY: every slot below capacity holds a valid value.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    /// Creates a cursor over the window `[begin, end)`.
    ///
    /// Returns `None` unless `begin <= end <= capacity()`.
    pub fn cursor(&self, begin: usize, end: usize) -> Option<Cursor<'_, T>> {
        if begin > end || end > self.capacity {
            return None;
        }

        Some(Cursor::new(self, begin, end))
    }

    /// Creates a cursor over the logically present elements.
    pub fn iter(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0, self.len)
    }

    /// Runs `dtor` on every element of `[0, len)` in order, then drops the vector.
    ///
    /// Dropping still runs `T`'s own `Drop` on every element of `[0, len)`
    /// after its callback, so `dtor` must not release anything `Drop`
    /// releases too. The buffer is released through the policy last.
    pub fn dispose_with<F>(self, mut dtor: F)
    where
        F: FnMut(&mut T),
    {
        for idx in 0..self.len {
            // SAFETY: idx < len, the slot holds a live value.
            dtor(unsafe { &mut *self.slot(idx) });
        }
    }
}

impl<T> Drop for GapVec<T>
where
    T: Zeroable,
{
    fn drop(&mut self) {
        // SAFETY: the first len slots are live and dropped exactly once, then
        // the buffer is released and never touched again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            self.release_buffer();
        }
    }
}

impl<'a, T> IntoIterator for &'a GapVec<T>
where
    T: Zeroable,
{
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
