// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for ordering strategies.

use core::fmt::Debug;

use crate::types::Key;

/// Read access to the live entries of an index, handed to a backend.
///
/// Values are resolved on every call; backends must not assume two calls for
/// the same slot return the same value unless nothing changed in between.
pub trait Probe<T> {
    /// Current value of the entry stored in `slot`.
    fn value(&self, slot: usize) -> T;

    /// Key of the entry stored in `slot`.
    fn key(&self, slot: usize) -> Key;
}

/// Ordering backend abstraction used by `IndexGeneric`.
pub trait Backend<T: Copy + PartialOrd + Debug> {
    /// Start tracking a newly inserted slot.
    ///
    /// Backends that keep an order may defer placing the slot until the next
    /// [`reorder`](Self::reorder), but must include it in queries meanwhile.
    fn insert(&mut self, slot: usize);

    /// Stop tracking a slot.
    fn remove(&mut self, slot: usize);

    /// Forget every slot.
    fn clear(&mut self);

    /// Re-establish any cached ordering after values may have changed.
    ///
    /// Returns `true` if the cached order changed.
    fn reorder(&mut self, probe: &dyn Probe<T>) -> bool;

    /// Slot of the floor entry for `pos`: the greatest value not exceeding
    /// `pos`, ties to the earliest key, clamped to the lowest entry when no
    /// value qualifies. `None` only when no slots are tracked.
    fn floor(&self, pos: T, probe: &dyn Probe<T>) -> Option<usize>;
}
