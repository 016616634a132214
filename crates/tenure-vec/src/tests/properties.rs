// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::SimpleVec;

/// A vector holding `values` with `extra` spare slots.
fn build(values: &[i32], extra: usize) -> SimpleVec<i32> {
    let mut vec = SimpleVec::try_from_slice(values).expect("Failed to try_from_slice(..)");
    vec.reserve(values.len() + extra).expect("Failed to reserve(..)");
    vec
}

proptest! {
    #[test]
    fn prop_push_back_appends(
        values in prop::collection::vec(any::<i32>(), 0..64),
        extra in 0..8usize,
        x in any::<i32>()
    ) {
        let mut vec = build(&values, extra);
        let (old_len, old_capacity) = (vec.len(), vec.capacity());

        vec.push_back(x).expect("Failed to push_back(..)");

        prop_assert_eq!(vec.len(), old_len + 1);
        prop_assert_eq!(vec[old_len], x);
        prop_assert_eq!(&vec.as_slice()[..old_len], values.as_slice());

        if old_len == old_capacity {
            prop_assert_eq!(vec.capacity(), core::cmp::max(1, 2 * old_capacity));
        } else {
            prop_assert_eq!(vec.capacity(), old_capacity);
        }
    }

    #[test]
    fn prop_resize_shrink_keeps_prefix_and_capacity(
        values in prop::collection::vec(any::<i32>(), 1..64),
        cut in any::<prop::sample::Index>()
    ) {
        let mut vec = build(&values, 0);
        let capacity = vec.capacity();
        let new_len = cut.index(values.len());

        vec.resize(new_len).expect("Failed to resize(..)");

        prop_assert_eq!(vec.len(), new_len);
        prop_assert_eq!(vec.capacity(), capacity);
        prop_assert_eq!(vec.as_slice(), &values[..new_len]);
    }

    #[test]
    fn prop_resize_grow_follows_growth_rule(
        values in prop::collection::vec(any::<i32>(), 0..32),
        extra in 0..8usize,
        grow in 1..64usize
    ) {
        let mut vec = build(&values, extra);
        let capacity = vec.capacity();
        let new_len = values.len() + grow;

        vec.resize(new_len).expect("Failed to resize(..)");

        prop_assert_eq!(vec.len(), new_len);
        prop_assert_eq!(vec.capacity(), core::cmp::max(new_len, 2 * capacity));
        prop_assert_eq!(&vec.as_slice()[..values.len()], values.as_slice());
        prop_assert!(vec.as_slice()[values.len()..].iter().all(|&v| v == 0));
    }

    #[test]
    fn prop_reserve(
        values in prop::collection::vec(any::<i32>(), 0..32),
        extra in 0..8usize,
        request in 0..96usize
    ) {
        let mut vec = build(&values, extra);
        let capacity = vec.capacity();

        vec.reserve(request).expect("Failed to reserve(..)");

        prop_assert_eq!(vec.capacity(), core::cmp::max(capacity, request));
        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }

    #[test]
    fn prop_insert_erase_round_trip(
        values in prop::collection::vec(any::<i32>(), 0..32),
        extra in 0..4usize,
        at in any::<prop::sample::Index>(),
        x in any::<i32>()
    ) {
        let mut vec = build(&values, extra);
        let pos = at.index(values.len() + 1);

        let inserted = vec.insert(pos, x).expect("Failed to insert(..)");
        prop_assert_eq!(vec[inserted], x);
        prop_assert_eq!(vec.len(), values.len() + 1);

        vec.erase(inserted).expect("Failed to erase(..)");
        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }

    #[test]
    fn prop_clone_is_exact_and_independent(
        values in prop::collection::vec(any::<i32>(), 0..32),
        extra in 0..8usize
    ) {
        let source = build(&values, extra);
        let mut copy = source.clone();

        prop_assert_eq!(copy.len(), source.len());
        prop_assert_eq!(copy.capacity(), source.len());
        prop_assert_eq!(&copy, &source);

        copy.push_back(1).expect("Failed to push_back(..)");
        prop_assert_eq!(source.as_slice(), values.as_slice());
    }

    #[test]
    fn prop_clear_then_refill_does_not_reallocate(
        values in prop::collection::vec(any::<i32>(), 1..32)
    ) {
        let mut vec = build(&values, 0);
        let (capacity, ptr) = (vec.capacity(), vec.as_ptr());

        vec.clear();
        prop_assert_eq!(vec.capacity(), capacity);

        for &value in values.iter().rev() {
            vec.push_back(value).expect("Failed to push_back(..)");
        }

        prop_assert_eq!(vec.as_ptr(), ptr);
        prop_assert_eq!(vec.capacity(), capacity);
    }

    #[test]
    fn prop_ordering_is_lexicographic(
        a in prop::collection::vec(0..4i32, 0..6),
        b in prop::collection::vec(0..4i32, 0..6)
    ) {
        let va = build(&a, 0);
        let vb = build(&b, 3);

        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
        prop_assert_eq!(vb == va, va == vb);
        prop_assert_eq!(va < vb, vb > va);
        prop_assert_eq!(va <= vb, !(vb < va));
    }
}
