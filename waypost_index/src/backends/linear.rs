// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scan backend. Keeps no order; correct under fully dynamic values.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::{Backend, Probe};
use crate::types::{Key, beats_floor, le, rank};

/// Linear scan backend.
#[derive(Clone, Default)]
pub struct LinearScan {
    live: Vec<usize>,
}

impl Debug for LinearScan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearScan")
            .field("alive", &self.live.len())
            .finish_non_exhaustive()
    }
}

impl<T: Copy + PartialOrd + Debug> Backend<T> for LinearScan {
    fn insert(&mut self, slot: usize) {
        self.live.push(slot);
    }

    fn remove(&mut self, slot: usize) {
        self.live.retain(|&s| s != slot);
    }

    fn clear(&mut self) {
        self.live.clear();
    }

    fn reorder(&mut self, _probe: &dyn Probe<T>) -> bool {
        false
    }

    fn floor(&self, pos: T, probe: &dyn Probe<T>) -> Option<usize> {
        let mut best: Option<(T, Key, usize)> = None;
        let mut lowest: Option<(T, Key, usize)> = None;
        for &slot in &self.live {
            let v = probe.value(slot);
            let k = probe.key(slot);
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
