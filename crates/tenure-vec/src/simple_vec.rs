// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use tenure_buffer::{BufferError, OwningBuffer};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::SimpleVecBehaviour;
use crate::error::SimpleVecError;
use crate::reserve_hint::ReserveHint;

/// Moves every element of `src` into the matching slot of `dst`.
///
/// Stops at the shorter of the two slices. Moved-from slots are left holding
/// `T::default()`.
fn move_into<T: Default>(dst: &mut [T], src: &mut [T]) {
    for (slot, item) in dst.iter_mut().zip(src.iter_mut()) {
        *slot = core::mem::take(item);
    }
}

/// A growable contiguous array with explicit size/capacity policy.
///
/// `SimpleVec` keeps its elements in an [`OwningBuffer`] and tracks two
/// counters on top of it:
///
/// - `len`: elements in `[0, len)` are live.
/// - `capacity`: slots in `[len, capacity)` are allocated but logically absent.
///
/// `len <= capacity <= buffer length` holds after every operation.
///
/// Capacity never changes in place. Every operation that needs a different
/// buffer builds a new one, moves the live elements across, then swaps it in;
/// the old buffer is released by its drop. If the new buffer cannot be
/// allocated the operation returns an error before the swap and the vector is
/// left untouched.
///
/// # Example
///
/// ```rust
/// use tenure_vec::{SimpleVec, SimpleVecError};
///
/// fn example() -> Result<(), SimpleVecError> {
///     let mut vec = SimpleVec::new();
///
///     vec.push_back(1)?;
///     vec.push_back(2)?;
///     vec.push_back(3)?;
///     assert_eq!(vec.capacity(), 4);
///
///     let pos = vec.insert(1, 9)?;
///     assert_eq!(vec, [1, 9, 2, 3]);
///
///     vec.erase(pos)?;
///     assert_eq!(vec, [1, 2, 3]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct SimpleVec<T> {
    items: OwningBuffer<T>,
    len: usize,
    capacity: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: SimpleVecBehaviour,
}

impl<T> SimpleVec<T> {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self::from_buffer(OwningBuffer::new(), 0)
    }

    const fn from_buffer(items: OwningBuffer<T>, len: usize) -> Self {
        Self {
            items,
            len,
            capacity: len,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: SimpleVecBehaviour::None,
        }
    }

    /// Creates a vector of `len` elements, each `T::default()`.
    ///
    /// `len == capacity` afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if the storage cannot be allocated.
    pub fn with_len(len: usize) -> Result<Self, SimpleVecError>
    where
        T: Default,
    {
        let items = OwningBuffer::with_len(len)?;
        Ok(Self::from_buffer(items, len))
    }

    /// Creates a vector of `len` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if the storage cannot be allocated.
    pub fn from_elem(len: usize, value: T) -> Result<Self, SimpleVecError>
    where
        T: Clone,
    {
        let items = OwningBuffer::from_fn(len, |_| value.clone())?;
        Ok(Self::from_buffer(items, len))
    }

    /// Creates a vector holding a copy of `items`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if the storage cannot be allocated.
    pub fn try_from_slice(items: &[T]) -> Result<Self, SimpleVecError>
    where
        T: Clone,
    {
        let buffer = OwningBuffer::from_fn(items.len(), |i| items[i].clone())?;
        Ok(Self::from_buffer(buffer, items.len()))
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, SimpleVecError>
    where
        T: Default,
    {
        let mut vec = Self::new();
        vec.reserve(capacity)?;
        Ok(vec)
    }

    /// Creates an empty vector from a [`ReserveHint`].
    ///
    /// Equivalent to `SimpleVec::new()` followed by `reserve(hint.capacity())`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if the storage cannot be allocated.
    pub fn with_reserve(hint: ReserveHint) -> Result<Self, SimpleVecError>
    where
        T: Default,
    {
        Self::with_capacity(hint.capacity())
    }

    /// Copies the live elements into a new, independent vector.
    ///
    /// The copy is exactly as large as needed: its capacity equals its length,
    /// whatever the capacity of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if the storage cannot be allocated.
    /// `self` is never modified.
    pub fn try_clone(&self) -> Result<Self, SimpleVecError>
    where
        T: Clone,
    {
        let live = self.as_slice();
        let items = self.allocate_with(live.len(), |i| live[i].clone())?;
        Ok(Self::from_buffer(items, live.len()))
    }

    #[doc(hidden)]
    pub fn __from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem(len, value).unwrap_or_else(|e| e.abort::<T>())
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.len]
    }

    /// Checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenure_vec::{simple_vec, SimpleVecError};
    ///
    /// let vec = simple_vec![10, 20];
    ///
    /// assert_eq!(vec.at(1), Ok(&20));
    /// assert_eq!(vec.at(2), Err(SimpleVecError::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, SimpleVecError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(SimpleVecError::OutOfRange { index, len })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVecError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SimpleVecError::OutOfRange { index, len })
    }

    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over the live elements that allows modifying each value.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drops every live element from the logical range.
    ///
    /// Capacity and storage are untouched: nothing is deallocated or reset, and
    /// later pushes reuse the same buffer until it is full.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Removes the last element from the logical range. No-op when empty.
    ///
    /// The slot keeps its old value until overwritten or the buffer is released.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            return;
        }

        self.len -= 1;
    }

    /// Exchanges contents, length and capacity with `other`. Never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.len, &mut other.len);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Returns the full allocated range `[0, capacity)`, regardless of len.
    ///
    /// # Safety
    ///
    /// This method is only available with the `unsafe` feature.
    /// Slots beyond `len()` hold values left behind by `clear`, `pop_back` or
    /// `resize`, or `T::default()`.
    #[cfg(any(test, feature = "unsafe"))]
    #[inline(always)]
    pub fn as_capacity_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.capacity]
    }

    /// Returns the full allocated range `[0, capacity)` mutably, regardless of len.
    ///
    /// # Safety
    ///
    /// This method is only available with the `unsafe` feature.
    #[cfg(any(test, feature = "unsafe"))]
    #[inline(always)]
    pub fn as_capacity_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.capacity]
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: SimpleVecBehaviour) {
        self.behaviour = behaviour;
    }

    #[inline(always)]
    fn debug_assert_invariant(&self) {
        debug_assert!(
            self.len <= self.capacity && self.capacity <= self.items.len(),
            "SimpleVec: len={} capacity={} buffer={}",
            self.len,
            self.capacity,
            self.items.len()
        );
    }

    fn doubled_capacity(&self) -> Result<usize, SimpleVecError> {
        Ok(self
            .capacity
            .checked_mul(2)
            .ok_or(BufferError::CapacityOverflow)?)
    }

    /// Allocates a buffer of `slots` slots, slot `i` initialized with `f(i)`.
    ///
    /// Every buffer a `SimpleVec` builds from an existing one goes through here.
    /// Zero slots never allocate and never fail.
    fn allocate_with<F>(&self, slots: usize, f: F) -> Result<OwningBuffer<T>, SimpleVecError>
    where
        F: FnMut(usize) -> T,
    {
        #[cfg(any(test, feature = "test_utils"))]
        if slots > 0 && matches!(self.behaviour, SimpleVecBehaviour::FailAtAlloc) {
            return Err(BufferError::AllocationFailed { requested: slots }.into());
        }

        Ok(OwningBuffer::from_fn(slots, f)?)
    }

    /// Allocates a replacement buffer of `slots` default-initialized slots.
    fn allocate(&self, slots: usize) -> Result<OwningBuffer<T>, SimpleVecError>
    where
        T: Default,
    {
        self.allocate_with(slots, |_| T::default())
    }

    /// Moves the live elements into a new buffer of `capacity` slots and swaps it in.
    #[cold]
    #[inline(never)]
    fn relocate(&mut self, capacity: usize) -> Result<(), SimpleVecError>
    where
        T: Default,
    {
        let mut items = self.allocate(capacity)?;

        move_into(items.as_mut_slice(), self.as_mut_slice());
        self.items.swap(&mut items);
        self.capacity = capacity;

        Ok(())
    }

    /// Changes the number of live elements to `new_len`.
    ///
    /// - `new_len == len`: no-op.
    /// - `new_len < len`: the logical range shrinks; nothing is deallocated and
    ///   the dropped-off slots keep their old values.
    /// - `new_len > len`: a new buffer of `max(new_len, 2 * capacity)` slots is
    ///   allocated, live elements are moved into it and the new tail is
    ///   `T::default()`. This is the growth rule shared by `push_back`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if growing fails. The vector is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenure_vec::{simple_vec, SimpleVecError};
    ///
    /// fn example() -> Result<(), SimpleVecError> {
    ///     let mut vec = simple_vec![1, 2, 3];
    ///
    ///     vec.resize(5)?;
    ///     assert_eq!(vec, [1, 2, 3, 0, 0]);
    ///     assert_eq!(vec.capacity(), 6);
    ///
    ///     vec.resize(1)?;
    ///     assert_eq!(vec, [1]);
    ///     assert_eq!(vec.capacity(), 6);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn resize(&mut self, new_len: usize) -> Result<(), SimpleVecError>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }

        let capacity = core::cmp::max(new_len, self.doubled_capacity()?);
        self.relocate(capacity)?;
        self.len = new_len;

        self.debug_assert_invariant();
        Ok(())
    }

    /// Grows capacity to exactly `capacity` slots. No-op if already that large.
    ///
    /// Length and elements are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if the new buffer cannot be allocated.
    /// The vector is unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), SimpleVecError>
    where
        T: Default,
    {
        if capacity <= self.capacity {
            return Ok(());
        }

        self.relocate(capacity)?;

        self.debug_assert_invariant();
        Ok(())
    }

    /// Appends `item` at the end.
    ///
    /// O(1) while `len < capacity`. When full, grows through [`resize`](Self::resize),
    /// so capacity goes 0 → 1 → 2 → 4 → 8 ...
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVecError::Buffer`] if growing fails. The vector is
    /// unchanged and `item` is dropped.
    pub fn push_back(&mut self, item: T) -> Result<(), SimpleVecError>
    where
        T: Default,
    {
        if self.len < self.capacity {
            self.items[self.len] = item;
            self.len += 1;
            return Ok(());
        }

        let new_len = self
            .len
            .checked_add(1)
            .ok_or(BufferError::CapacityOverflow)?;
        self.resize(new_len)?;
        self.items[new_len - 1] = item;

        Ok(())
    }

    /// Inserts `value` at position `pos`, shifting `[pos, len)` one slot right.
    ///
    /// `pos` may be anything in `[0, len]`. Returns the position of the inserted
    /// element.
    ///
    /// Every insert builds a new buffer, even with spare capacity. Capacity
    /// becomes 1 when it was 0, doubles when the vector was full, and is kept
    /// otherwise. References into the vector do not survive the call.
    ///
    /// # Errors
    ///
    /// - [`SimpleVecError::InvalidPosition`] if `pos > len`.
    /// - [`SimpleVecError::Buffer`] if the new buffer cannot be allocated.
    ///
    /// The vector is unchanged on error.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, SimpleVecError>
    where
        T: Default,
    {
        if pos > self.len {
            return Err(SimpleVecError::InvalidPosition { pos, len: self.len });
        }

        let capacity = if self.capacity == 0 {
            1
        } else if self.len == self.capacity {
            self.doubled_capacity()?
        } else {
            self.capacity
        };

        let mut items = self.allocate(capacity)?;
        {
            let slots = items.as_mut_slice();
            let (head, tail) = self.as_mut_slice().split_at_mut(pos);

            move_into(&mut slots[..pos], head);
            move_into(&mut slots[pos + 1..], tail);
            slots[pos] = value;
        }

        self.items.swap(&mut items);
        self.len += 1;
        self.capacity = capacity;

        self.debug_assert_invariant();
        Ok(pos)
    }

    /// Removes the element at `pos`, shifting `(pos, len)` one slot left.
    ///
    /// Returns `pos`, which now holds the element that followed the erased one
    /// (or equals `len()` if the last element was erased). Capacity is kept.
    ///
    /// Every erase builds a new buffer; the erased value is dropped together
    /// with the old buffer. References into the vector do not survive the call.
    ///
    /// # Errors
    ///
    /// - [`SimpleVecError::InvalidPosition`] if `pos >= len`.
    /// - [`SimpleVecError::Buffer`] if the new buffer cannot be allocated.
    ///
    /// The vector is unchanged on error.
    pub fn erase(&mut self, pos: usize) -> Result<usize, SimpleVecError>
    where
        T: Default,
    {
        if pos >= self.len {
            return Err(SimpleVecError::InvalidPosition { pos, len: self.len });
        }

        let mut items = self.allocate(self.capacity)?;
        {
            let slots = items.as_mut_slice();
            let (head, tail) = self.as_mut_slice().split_at_mut(pos);

            move_into(&mut slots[..pos], head);
            move_into(&mut slots[pos..], &mut tail[1..]);
        }

        self.items.swap(&mut items);
        self.len -= 1;

        self.debug_assert_invariant();
        Ok(pos)
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVec<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| e.abort::<T>())
    }

    /// Copy-constructs from `source`, then swaps. `self` is untouched if the copy fails.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleVec")
            .field("data", &self.as_slice())
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(items: [T; N]) -> Self {
        let items: Box<[T]> = Box::from(items);
        Self::from_buffer(OwningBuffer::from(items), N)
    }
}

impl<T: Default> FromIterator<T> for SimpleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Default> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item).unwrap_or_else(|e| e.abort::<T>());
        }
    }
}

/// Unchecked-contract access: callers validate `index < len()` beforehand.
///
/// Out-of-range indices panic rather than read past the live range; use
/// [`SimpleVec::at`] to get an error instead.
impl<T> Index<usize> for SimpleVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SimpleVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Yields the live elements by value; slots past `len` are dropped with the buffer.
impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut items = self.items.release().map(Vec::from).unwrap_or_default();
        items.truncate(self.len);
        items.into_iter()
    }
}
