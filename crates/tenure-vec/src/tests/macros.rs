// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{SimpleVec, simple_vec};

#[test]
fn test_simple_vec_empty() {
    let vec: SimpleVec<u8> = simple_vec![];

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_simple_vec_list() {
    let vec = simple_vec![1, 2, 3];

    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 3);
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_simple_vec_list_trailing_comma() {
    let vec = simple_vec!["a", "b",];
    assert_eq!(vec, ["a", "b"]);
}

#[test]
fn test_simple_vec_repeat() {
    let vec = simple_vec![9u16; 4];

    assert_eq!(vec.len(), 4);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec, [9, 9, 9, 9]);
}

#[test]
fn test_simple_vec_repeat_zero() {
    let vec = simple_vec![9u16; 0];

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_same_literal_sequences_compare_equal() {
    assert_eq!(simple_vec![4, 5, 6], simple_vec![4, 5, 6]);
}
