// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in `SimpleVec` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use tenure_vec::{SimpleVec, SimpleVecBehaviour, SimpleVecError};
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), SimpleVecError> {
///         let mut vec = SimpleVec::<u8>::new();
///
///         // Inject failure
///         vec.change_behaviour(SimpleVecBehaviour::FailAtAlloc);
///
///         // Growth needs a new buffer, so this fails and leaves vec untouched
///         assert!(vec.push_back(1).is_err());
///         assert_eq!(vec.capacity(), 0);
///
///         // Reset to normal behaviour
///         vec.change_behaviour(SimpleVecBehaviour::None);
///
///         // Now it works
///         vec.push_back(1)?;
///         Ok(())
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimpleVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every allocation attempt fails with `BufferError::AllocationFailed`.
    FailAtAlloc,
}
