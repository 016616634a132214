// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Tenure crates.
//!
//! - [`index_permutations`] / [`apply_permutation`]: exhaustive orderings of positions.
//! - [`Ledger`] / [`Tracked`]: an element type that records creations, clones and drops,
//!   so tests can check that every value is released exactly once and that
//!   reallocation moves values instead of cloning them.
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;
mod tracked;

pub use permutations::{apply_permutation, index_permutations};
pub use tracked::{Ledger, Tracked};
