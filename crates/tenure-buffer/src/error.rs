// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tenure-buffer.

use thiserror::Error;

/// Errors that can occur when allocating a buffer.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The allocator could not provide the requested number of slots.
    #[error("allocation of {requested} slots failed")]
    AllocationFailed {
        /// Number of `T` slots that were requested.
        requested: usize,
    },

    /// The requested slot count, or its size in bytes, does not fit the address space.
    #[error("capacity overflow: requested slots exceed isize::MAX bytes")]
    CapacityOverflow,
}
