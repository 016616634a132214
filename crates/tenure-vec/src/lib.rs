// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array built on an exclusive-ownership buffer.
//!
//! `SimpleVec<T>` tracks a logical length and an allocated capacity on top of
//! a [`tenure_buffer::OwningBuffer`]. It never reallocates in place: every
//! capacity change allocates a new buffer, moves the live elements across and
//! swaps ownership, letting the old buffer release itself.
//!
//! # Core Guarantees
//!
//! - **Explicit growth policy**: growth goes to `max(needed, 2 * capacity)`;
//!   `reserve()` allocates exactly what it is asked for.
//! - **Strong exception safety**: every allocating operation returns a `Result`
//!   and leaves the vector untouched on failure.
//! - **Two access contracts**: `vec[i]` for indices the caller has already
//!   validated, `vec.at(i)` when the index still needs checking.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use tenure_vec::{SimpleVec, SimpleVecError};
//!
//! fn example() -> Result<(), SimpleVecError> {
//!     let mut vec = SimpleVec::<u8>::new();
//!
//!     for i in 1u8..=3 {
//!         vec.push_back(i)?;
//!     }
//!
//!     assert_eq!(vec.len(), 3);
//!     assert_eq!(vec.capacity(), 4);
//!     assert_eq!(vec[0], 1);
//!     assert!(vec.at(3).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reservation
//!
//! ```rust
//! use tenure_vec::{reserve, SimpleVec, SimpleVecError};
//!
//! fn example() -> Result<(), SimpleVecError> {
//!     let mut vec = SimpleVec::<u32>::with_reserve(reserve(8))?;
//!
//!     for i in 0..8 {
//!         vec.push_back(i)?;
//!     }
//!
//!     // No growth happened
//!     assert_eq!(vec.capacity(), 8);
//!
//!     vec.clear();
//!     assert_eq!(vec.capacity(), 8);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! tenure-vec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`SimpleVecBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use tenure_vec::{simple_vec, SimpleVecBehaviour};
//!
//!     #[test]
//!     fn test_handles_allocation_failure() {
//!         let mut vec = simple_vec![1u8, 2];
//!         vec.change_behaviour(SimpleVecBehaviour::FailAtAlloc);
//!
//!         assert!(vec.insert(0, 0).is_err());
//!         assert_eq!(vec, [1, 2]);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
mod cmp;
mod error;
mod macros;
mod reserve_hint;
mod simple_vec;

#[cfg(test)]
mod tests;

pub use error::SimpleVecError;
pub use reserve_hint::{ReserveHint, reserve};
pub use simple_vec::SimpleVec;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::SimpleVecBehaviour;
