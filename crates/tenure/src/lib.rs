// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusive-ownership buffers and a growable array with an explicit growth policy.
//!
//! Tenure is two small layers:
//!
//! - [`buffer`]: `OwningBuffer<T>`, a handle that exclusively owns one heap
//!   block of `T` slots and releases it exactly once.
//! - [`vec`]: `SimpleVec<T>`, a dynamic array that tracks length and capacity
//!   separately and grows to `max(needed, 2 * capacity)`.
//!
//! Every allocating operation is fallible and leaves its receiver untouched
//! when allocation fails.
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! tenure = "0.1.0"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tenure::vec::{reserve, simple_vec, SimpleVec, SimpleVecError};
//!
//! fn main() -> Result<(), SimpleVecError> {
//!     let mut vec: SimpleVec<i32> = simple_vec![1, 2, 3, 4];
//!
//!     vec.insert(0, 0)?;
//!     vec.erase(4)?;
//!     assert_eq!(vec, [0, 1, 2, 3]);
//!
//!     let mut reserved = SimpleVec::<i32>::with_reserve(reserve(16))?;
//!     reserved.push_back(42)?;
//!     assert_eq!(reserved.capacity(), 16);
//!
//!     // Checked access
//!     assert!(vec.at(10).is_err());
//!     Ok(())
//! }
//! ```
//!
//! # Ownership Transfer
//!
//! ```rust
//! use tenure::buffer::OwningBuffer;
//!
//! let mut a = OwningBuffer::from_fn(3, |i| i * 10).expect("Failed to allocate");
//! let b = a.take();
//!
//! assert!(!a.is_allocated());
//! assert_eq!(b.as_slice(), &[0, 10, 20]);
//! ```
//!
//! # Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `test-utils` | Allocation failure injection via `SimpleVecBehaviour` |
//! | `unsafe` | Raw capacity views on `SimpleVec` |

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

/// Exclusive-ownership heap buffers.
pub mod buffer {
    pub use tenure_buffer::*;
}

/// Growable arrays built on [`crate::buffer::OwningBuffer`].
pub mod vec {
    pub use tenure_vec::*;
}
