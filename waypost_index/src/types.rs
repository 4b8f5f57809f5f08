// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry handles and ordering helpers.

use core::cmp::Ordering;

/// Stable handle for an indexed entry.
///
/// Keys are issued in strictly increasing order over the lifetime of an index,
/// so comparing two keys compares their insertion order. A key is never
/// reissued, even after its entry is removed and the slot reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    serial: u64,
    slot: u32,
}

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Slots are intentionally 32-bit; an index never holds 2^32 live entries."
    )]
    pub(crate) const fn new(serial: u64, slot: usize) -> Self {
        Self {
            serial,
            slot: slot as u32,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        self.slot as usize
    }

    /// Insertion serial of this key. Earlier entries have smaller serials.
    pub const fn serial(self) -> u64 {
        self.serial
    }
}

/// Total order shared by every backend: ascending value, then insertion order.
///
/// Values that are not comparable with themselves (NaN) sort after every
/// other value, keeping the order total.
pub(crate) fn rank<T: PartialOrd>(a: (T, Key), b: (T, Key)) -> Ordering {
    match a.0.partial_cmp(&b.0) {
        Some(Ordering::Equal) => a.1.cmp(&b.1),
        Some(o) => o,
        None => match (is_unordered(&a.0), is_unordered(&b.0)) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => a.1.cmp(&b.1),
        },
    }
}

fn is_unordered<T: PartialOrd>(v: &T) -> bool {
    v.partial_cmp(v).is_none()
}

/// Whether `(v, k)` is a better floor candidate than `(best_v, best_k)`:
/// a strictly larger value, or the same value inserted earlier.
pub(crate) fn beats_floor<T: PartialOrd>(v: T, k: Key, best_v: T, best_k: Key) -> bool {
    match v.partial_cmp(&best_v) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => k < best_k,
        _ => false,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
