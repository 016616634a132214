// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusive-ownership handle over one heap-allocated contiguous block.
//!
//! [`OwningBuffer<T>`] owns either nothing or exactly one allocation of `T`
//! slots. It is the storage layer for `tenure-vec`: every capacity change in
//! the vector builds a fresh `OwningBuffer`, fills it and swaps it in, so the
//! old allocation is released by the buffer's drop and never by hand.
//!
//! # Core Guarantees
//!
//! - **Single owner**: `OwningBuffer` is not `Clone`. Moving, [`take`](OwningBuffer::take)
//!   and [`swap`](OwningBuffer::swap) transfer the allocation; the source is left empty.
//! - **Released exactly once**: the allocation is freed when its owner drops, or handed
//!   out through [`release`](OwningBuffer::release), after which the caller owns it.
//! - **Fallible allocation**: construction reports [`BufferError`] instead of aborting,
//!   and never leaves a half-built buffer behind.
//!
//! # Example
//!
//! ```rust
//! use tenure_buffer::{BufferError, OwningBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = OwningBuffer::<u32>::with_len(4)?;
//!     buffer[0] = 42;
//!
//!     let mut other = buffer.take();
//!     assert!(!buffer.is_allocated());
//!     assert_eq!(other[0], 42);
//!
//!     // Ownership leaves the handle entirely.
//!     let raw = other.release();
//!     assert_eq!(raw.as_deref(), Some(&[42, 0, 0, 0][..]));
//!     assert!(other.release().is_none());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod owning_buffer;

pub use error::BufferError;
pub use owning_buffer::OwningBuffer;
