// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exhaustive insert/erase orderings.

use tenure_test_utils::{apply_permutation, index_permutations};

use crate::SimpleVec;

const MAX_LEN: usize = 6;

/// Position of `value` in a sorted vector that holds `placed`.
fn rank(placed: &[bool], value: usize) -> usize {
    placed[..value].iter().filter(|&&p| p).count()
}

#[test]
fn test_sorted_insert_in_every_order() {
    for len in 1..=MAX_LEN {
        index_permutations(len, |perm| {
            let mut vec = SimpleVec::new();
            let mut placed = [false; MAX_LEN];

            for &value in perm {
                let pos = rank(&placed, value);
                let at = vec.insert(pos, value).expect("Failed to insert(..)");

                assert_eq!(at, pos);
                assert_eq!(vec[at], value);
                placed[value] = true;
            }

            assert!(vec.iter().copied().eq(0..len), "perm {:?} gave {:?}", perm, vec);
            assert!(vec.capacity() >= vec.len());
        });
    }
}

#[test]
fn test_erase_in_every_order() {
    for len in 1..=MAX_LEN {
        index_permutations(len, |perm| {
            let mut vec: SimpleVec<usize> = (0..len).collect();
            let capacity = vec.capacity();
            let mut placed = [true; MAX_LEN];

            for &value in perm {
                let pos = rank(&placed, value);
                assert_eq!(vec[pos], value);

                let at = vec.erase(pos).expect("Failed to erase(..)");
                placed[value] = false;

                assert_eq!(at, pos);
                let expected = (0..len).filter(|&v| placed[v]);
                assert!(vec.iter().copied().eq(expected));
                assert_eq!(vec.capacity(), capacity);
            }

            assert!(vec.is_empty());
        });
    }
}

#[test]
fn test_insert_then_erase_restores_every_position() {
    let original: SimpleVec<usize> = (0..MAX_LEN).collect();

    for pos in 0..=original.len() {
        let mut vec = original.clone();

        let at = vec.insert(pos, 99).expect("Failed to insert(..)");
        vec.erase(at).expect("Failed to erase(..)");

        assert_eq!(vec, original);
    }
}

#[test]
fn test_shuffled_contents_erase_from_front_in_shuffled_order() {
    for len in 1..=MAX_LEN {
        index_permutations(len, |perm| {
            let mut vec: SimpleVec<usize> = (0..len).collect();
            let ptr = vec.as_ptr();
            let capacity = vec.capacity();

            // In-place through DerefMut: no reallocation
            apply_permutation(&mut vec, perm);

            assert_eq!(vec.as_ptr(), ptr);
            assert_eq!(vec.capacity(), capacity);
            for (i, &value) in perm.iter().enumerate() {
                assert_eq!(vec[i], value);
            }

            for &value in perm {
                assert_eq!(vec.at(0), Ok(&value));
                vec.erase(0).expect("Failed to erase(0)");
            }

            assert!(vec.is_empty());
            assert_eq!(vec.capacity(), capacity);
        });
    }
}
