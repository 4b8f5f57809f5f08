// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sorted backend: slots kept in `(value, key)` order, floor by binary search.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::{Backend, Probe};
use crate::types::{Key, beats_floor, le, lt, rank};

/// Sorted slot list with binary-search floor queries.
///
/// Values are still resolved at query time, but only O(log n) of them.
/// Inserted slots wait in a small unplaced list (scanned linearly by queries)
/// until the next [`Backend::reorder`] merges them into the sorted order.
#[derive(Clone, Default)]
pub struct SortedVec {
    order: Vec<usize>,
    unplaced: Vec<usize>,
}

impl Debug for SortedVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortedVec")
            .field("placed", &self.order.len())
            .field("unplaced", &self.unplaced.len())
            .finish_non_exhaustive()
    }
}

impl SortedVec {
    /// Floor among placed slots only: `(best qualifying, lowest)`.
    fn floor_placed<T: Copy + PartialOrd>(
        &self,
        pos: T,
        probe: &dyn Probe<T>,
    ) -> (Option<usize>, Option<usize>) {
        let Some(&first) = self.order.first() else {
            return (None, None);
        };

        // First position whose value exceeds `pos`.
        let (mut lo, mut hi) = (0, self.order.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if le(probe.value(self.order[mid]), pos) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        if lo == 0 {
            return (None, Some(first));
        }

        // Earliest entry of the run sharing the floor value.
        let target = probe.value(self.order[lo - 1]);
        let (mut a, mut b) = (0, lo - 1);
        while a < b {
            let mid = a + (b - a) / 2;
            if lt(probe.value(self.order[mid]), target) {
                a = mid + 1;
            } else {
                b = mid;
            }
        }
        (Some(self.order[a]), Some(first))
    }
}

impl<T: Copy + PartialOrd + Debug> Backend<T> for SortedVec {
    fn insert(&mut self, slot: usize) {
        self.unplaced.push(slot);
    }

    fn remove(&mut self, slot: usize) {
        self.order.retain(|&s| s != slot);
        self.unplaced.retain(|&s| s != slot);
    }

    fn clear(&mut self) {
        self.order.clear();
        self.unplaced.clear();
    }

    fn reorder(&mut self, probe: &dyn Probe<T>) -> bool {
        let mut keyed: Vec<(T, Key, usize)> = self
            .order
            .iter()
            .chain(&self.unplaced)
            .map(|&s| (probe.value(s), probe.key(s), s))
            .collect();
        keyed.sort_by(|a, b| rank((a.0, a.1), (b.0, b.1)));
        let changed = !self.unplaced.is_empty()
            || keyed
                .iter()
                .zip(&self.order)
                .any(|(&(_, _, s), &old)| s != old);
        if changed {
            self.unplaced.clear();
            self.order.clear();
            self.order.extend(keyed.into_iter().map(|(_, _, s)| s));
        }
        changed
    }

    fn floor(&self, pos: T, probe: &dyn Probe<T>) -> Option<usize> {
        let (placed_best, placed_lowest) = self.floor_placed(pos, probe);
        if self.unplaced.is_empty() {
            return placed_best.or(placed_lowest);
        }

        let with_value = |slot: usize| (probe.value(slot), probe.key(slot), slot);
        let mut best = placed_best.map(with_value);
        let mut lowest = placed_lowest.map(with_value);
        for &slot in &self.unplaced {
            let (v, k, _) = with_value(slot);
            if le(v, pos) && best.is_none_or(|(bv, bk, _)| beats_floor(v, k, bv, bk)) {
                best = Some((v, k, slot));
            }
            if lowest.is_none_or(|(lv, lk, _)| rank((v, k), (lv, lk)).is_lt()) {
                lowest = Some((v, k, slot));
            }
        }
        best.or(lowest).map(|(_, _, slot)| slot)
    }
}
