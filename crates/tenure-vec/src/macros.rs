// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`SimpleVec`](crate::SimpleVec) from a literal sequence.
///
/// - `simple_vec![]` is empty and does not allocate.
/// - `simple_vec![a, b, c]` holds the listed elements in order.
/// - `simple_vec![value; n]` holds `n` clones of `value`.
///
/// In every form `len() == capacity()`. Like `vec!`, allocation failure aborts.
///
/// # Example
///
/// ```rust
/// use tenure_vec::simple_vec;
///
/// let listed = simple_vec![1, 2, 3];
/// assert_eq!(listed.len(), 3);
/// assert_eq!(listed.capacity(), 3);
///
/// let filled = simple_vec![7u8; 4];
/// assert_eq!(filled, [7, 7, 7, 7]);
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVec::__from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVec::from([$($x),+])
    };
}
