// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tenure-vec.

use core::alloc::Layout;

use tenure_buffer::BufferError;
use thiserror::Error;

/// Error type for `SimpleVec` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SimpleVecError {
    /// Checked access past the live range.
    #[error("index out of range: the len is {len} but the index is {index}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of live elements at the time of the access.
        len: usize,
    },

    /// `insert` past the end or `erase` at/after the end of the live range.
    #[error("invalid position: the len is {len} but the position is {pos}")]
    InvalidPosition {
        /// Requested position.
        pos: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },

    /// The replacement buffer could not be allocated.
    ///
    /// The vector is left exactly as it was before the call.
    #[error("BufferError: {0}")]
    Buffer(#[from] BufferError),
}

impl SimpleVecError {
    /// Diverges the way `alloc::vec::Vec` does when it cannot allocate.
    ///
    /// Used by trait impls (`Clone`, `From`, `FromIterator`, `Extend`) that
    /// have no way to return an error.
    #[cold]
    pub(crate) fn abort<T>(self) -> ! {
        match self {
            Self::Buffer(BufferError::AllocationFailed { requested }) => {
                match Layout::array::<T>(requested) {
                    Ok(layout) => alloc::alloc::handle_alloc_error(layout),
                    Err(_) => panic!("capacity overflow"),
                }
            }
            Self::Buffer(BufferError::CapacityOverflow) => panic!("capacity overflow"),
            other => panic!("{other}"),
        }
    }
}
