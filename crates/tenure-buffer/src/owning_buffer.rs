// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::ops::{Index, IndexMut};

use crate::error::BufferError;

/// Exclusive owner of zero or one contiguous heap allocation of `T`.
///
/// The handle is either empty or owns exactly one allocation, and no other
/// `OwningBuffer` ever refers to the same allocation. There is no `Clone`:
/// ownership only moves, through a Rust move, [`take`](Self::take),
/// [`swap`](Self::swap) or [`release`](Self::release).
///
/// The buffer does not track how many of its slots are meaningful. Callers
/// that layer a logical length on top (such as `SimpleVec`) keep it themselves.
///
/// # Example
///
/// ```rust
/// use tenure_buffer::{BufferError, OwningBuffer};
///
/// fn example() -> Result<(), BufferError> {
///     let mut a = OwningBuffer::from_fn(3, |i| i as u8)?;
///     let mut b = OwningBuffer::new();
///
///     a.swap(&mut b);
///
///     assert!(!a.is_allocated());
///     assert_eq!(b.get(), Some(&[0u8, 1, 2][..]));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct OwningBuffer<T> {
    raw: Option<Box<[T]>>,
}

impl<T> OwningBuffer<T> {
    /// Creates an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self { raw: None }
    }

    /// Allocates `len` slots, each initialized to `T::default()`.
    ///
    /// `len == 0` yields an empty buffer without allocating.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `len` slots of `T` exceed `isize::MAX` bytes.
    /// - [`BufferError::AllocationFailed`] if the allocator cannot provide
    ///   `len` slots.
    ///
    /// Nothing is allocated in either case.
    pub fn with_len(len: usize) -> Result<Self, BufferError>
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Allocates `len` slots, initializing slot `i` with `f(i)`.
    ///
    /// `len == 0` yields an empty buffer without allocating or calling `f`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `len` slots of `T` exceed `isize::MAX` bytes.
    /// - [`BufferError::AllocationFailed`] if the allocator cannot provide
    ///   `len` slots.
    ///
    /// `f` is never called in either case.
    pub fn from_fn<F>(len: usize, mut f: F) -> Result<Self, BufferError>
    where
        F: FnMut(usize) -> T,
    {
        if len == 0 {
            return Ok(Self::new());
        }

        Layout::array::<T>(len).map_err(|_| BufferError::CapacityOverflow)?;

        let mut items = Vec::new();
        items
            .try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailed { requested: len })?;

        for i in 0..len {
            items.push(f(i));
        }

        Ok(Self {
            raw: Some(items.into_boxed_slice()),
        })
    }

    /// Adopts an existing allocation without allocating.
    ///
    /// `None` and zero-length allocations both yield an empty buffer.
    pub fn from_raw(raw: Option<Box<[T]>>) -> Self {
        Self {
            raw: raw.filter(|items| !items.is_empty()),
        }
    }

    /// Gives up ownership of the allocation and leaves this buffer empty.
    ///
    /// The caller becomes responsible for the returned allocation. Returns
    /// `None` if the buffer was already empty.
    #[must_use = "dropping the released allocation frees it immediately"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.raw.take()
    }

    /// Moves the allocation into a new `OwningBuffer`, leaving this one empty.
    pub fn take(&mut self) -> Self {
        Self::from_raw(self.release())
    }

    /// Exchanges allocations with `other`. Constant time, never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Returns `true` if this buffer owns an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.raw.is_some()
    }

    /// Returns the number of allocated slots (0 when empty).
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.as_deref().map_or(0, <[T]>::len)
    }

    /// Returns `true` if the buffer has no allocated slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Observes the allocation without transferring ownership.
    #[inline]
    pub fn get(&self) -> Option<&[T]> {
        self.raw.as_deref()
    }

    /// Mutably observes the allocation without transferring ownership.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut [T]> {
        self.raw.as_deref_mut()
    }

    /// Returns every allocated slot as a slice (empty when unallocated).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_deref().unwrap_or(&[])
    }

    /// Returns every allocated slot as a mutable slice (empty when unallocated).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.raw.as_deref_mut().unwrap_or_default()
    }

    /// Returns a raw pointer to the first slot, or null when empty.
    ///
    /// The pointer identifies the allocation; it stays the same across
    /// [`swap`](Self::swap) and [`take`](Self::take) for whichever buffer ends
    /// up owning it.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw
            .as_deref()
            .map_or(core::ptr::null(), <[T]>::as_ptr)
    }

    /// Returns a reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "OwningBuffer::get_unchecked: index out of bounds");

        // SAFETY: the caller guarantees index < len.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "OwningBuffer::get_unchecked_mut: index out of bounds");

        // SAFETY: the caller guarantees index < len.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }
}

impl<T> Default for OwningBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for OwningBuffer<T> {
    fn from(raw: Box<[T]>) -> Self {
        Self::from_raw(Some(raw))
    }
}

impl<T> Index<usize> for OwningBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwningBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> core::fmt::Debug for OwningBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OwningBuffer")
            .field("allocated", &self.is_allocated())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
