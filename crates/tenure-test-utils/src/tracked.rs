// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element type that records its own lifecycle.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counts {
    created: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
}

impl Counts {
    fn bump(cell: &Cell<usize>) {
        cell.set(cell.get() + 1);
    }
}

/// Shared record of every [`Tracked`] value it has issued.
///
/// # Example
/// ```
/// use tenure_test_utils::Ledger;
///
/// let ledger = Ledger::new();
/// let a = ledger.track(1);
/// let b = a.clone();
///
/// assert_eq!(ledger.live(), 2);
/// assert_eq!(ledger.clones(), 1);
///
/// drop(a);
/// drop(b);
/// assert_eq!(ledger.live(), 0);
/// assert_eq!(ledger.drops(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    counts: Rc<Counts>,
}

impl Ledger {
    /// Creates a ledger with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new tracked value.
    pub fn track(&self, value: i32) -> Tracked {
        Counts::bump(&self.counts.created);

        Tracked {
            value,
            ledger: Some(self.clone()),
        }
    }

    /// Number of tracked values currently alive (created or cloned, not yet dropped).
    pub fn live(&self) -> usize {
        self.counts.created.get() - self.counts.dropped.get()
    }

    /// Number of `clone()` calls on tracked values.
    pub fn clones(&self) -> usize {
        self.counts.cloned.get()
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.counts.dropped.get()
    }
}

/// A value issued by a [`Ledger`].
///
/// `Tracked::default()` is untracked: it stands for a value-initialized slot
/// and never shows up in any ledger.
#[derive(Debug, Default)]
pub struct Tracked {
    value: i32,
    ledger: Option<Ledger>,
}

impl Tracked {
    /// Returns the payload.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns `true` if this value was issued by a ledger.
    pub fn is_tracked(&self) -> bool {
        self.ledger.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(ledger) = &self.ledger {
            Counts::bump(&ledger.counts.cloned);
            Counts::bump(&ledger.counts.created);
        }

        Self {
            value: self.value,
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(ledger) = &self.ledger {
            Counts::bump(&ledger.counts.dropped);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialEq<i32> for Tracked {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_untracked() {
        let ledger = Ledger::new();
        let value = Tracked::default();

        assert!(!value.is_tracked());
        assert_eq!(value.value(), 0);
        drop(value);

        assert_eq!(ledger.live(), 0);
        assert_eq!(ledger.drops(), 0);
    }

    #[test]
    fn test_track_and_drop() {
        let ledger = Ledger::new();
        let value = ledger.track(7);

        assert!(value.is_tracked());
        assert_eq!(value, 7);
        assert_eq!(ledger.live(), 1);

        drop(value);
        assert_eq!(ledger.live(), 0);
        assert_eq!(ledger.drops(), 1);
    }

    #[test]
    fn test_clone_is_counted() {
        let ledger = Ledger::new();
        let value = ledger.track(3);
        let copy = value.clone();

        assert_eq!(copy, value);
        assert_eq!(ledger.clones(), 1);
        assert_eq!(ledger.live(), 2);
    }

    #[test]
    fn test_move_is_not_counted() {
        let ledger = Ledger::new();
        let mut slot = ledger.track(5);
        let moved = core::mem::take(&mut slot);

        assert_eq!(moved, 5);
        assert!(!slot.is_tracked());
        assert_eq!(ledger.clones(), 0);
        assert_eq!(ledger.live(), 1);
    }
}
