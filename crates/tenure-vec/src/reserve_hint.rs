// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SimpleVecError;
use crate::simple_vec::SimpleVec;

/// A request to pre-allocate capacity without creating any element.
///
/// Built with [`reserve`] and consumed by [`SimpleVec::with_reserve`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    /// Creates a hint for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the number of slots to reserve.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveHint::new`].
///
/// # Example
///
/// ```rust
/// use tenure_vec::{reserve, SimpleVec, SimpleVecError};
///
/// fn example() -> Result<(), SimpleVecError> {
///     let vec = SimpleVec::<u32>::with_reserve(reserve(5))?;
///
///     assert_eq!(vec.len(), 0);
///     assert_eq!(vec.capacity(), 5);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub const fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}

impl<T> TryFrom<ReserveHint> for SimpleVec<T>
where
    T: Default,
{
    type Error = SimpleVecError;

    fn try_from(hint: ReserveHint) -> Result<Self, Self::Error> {
        Self::with_reserve(hint)
    }
}
