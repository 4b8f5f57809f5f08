// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::marker::PhantomData;

use crate::backend::{Backend, Probe};
use crate::backends::linear::LinearScan;
use crate::backends::sorted::SortedVec;
use crate::types::Key;

/// Payloads that can report their current position along the indexed axis.
///
/// `C` is whatever the payload needs to resolve itself, such as a layout
/// snapshot. Use `()` when values are self-contained.
pub trait Resolve<T, C: ?Sized> {
    /// Compute the current value. Called on every query; never cached by the index.
    fn resolve(&self, cx: &C) -> T;
}

#[derive(Clone, Debug)]
struct Entry<P> {
    key: Key,
    payload: P,
}

/// Backend view over the live entries, resolving values against `cx`.
struct View<'a, P, C: ?Sized> {
    entries: &'a [Option<Entry<P>>],
    cx: &'a C,
}

impl<P, C: ?Sized> View<'_, P, C> {
    fn entry(&self, slot: usize) -> &Entry<P> {
        match self.entries.get(slot) {
            Some(Some(e)) => e,
            _ => unreachable!("backend tracks vacated slot {slot}"),
        }
    }
}

impl<T, P: Resolve<T, C>, C: ?Sized> Probe<T> for View<'_, P, C> {
    fn value(&self, slot: usize) -> T {
        self.entry(slot).payload.resolve(self.cx)
    }

    fn key(&self, slot: usize) -> Key {
        self.entry(slot).key
    }
}

/// An ordered floor index parameterized by a backend.
#[derive(Debug)]
pub struct IndexGeneric<T, P, B> {
    entries: Vec<Option<Entry<P>>>,
    free_list: Vec<usize>,
    // Live slots in insertion order.
    order: Vec<usize>,
    next_serial: u64,
    len: usize,
    backend: B,
    _t: PhantomData<fn() -> T>,
}

impl<T, P, B> IndexGeneric<T, P, B>
where
    T: Copy + PartialOrd + Debug,
    B: Backend<T> + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<T, P, B> IndexGeneric<T, P, B>
where
    T: Copy + PartialOrd + Debug,
    B: Backend<T>,
{
    /// Create an empty index over an explicit backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
            next_serial: 0,
            len: 0,
            backend,
            _t: PhantomData,
        }
    }

    /// Reserve space for at least `n` more entries.
    pub fn reserve(&mut self, n: usize) {
        self.entries.reserve(n);
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `key` refers to a live entry.
    pub fn contains(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Borrow the payload for `key`.
    pub fn get(&self, key: Key) -> Option<&P> {
        match self.entries.get(key.slot())? {
            Some(e) if e.key == key => Some(&e.payload),
            _ => None,
        }
    }

    /// Mutably borrow the payload for `key`.
    ///
    /// Changing anything that affects the payload's resolved value requires a
    /// [`reorder`](Self::reorder) before the next query on sorted backends.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut P> {
        match self.entries.get_mut(key.slot())? {
            Some(e) if e.key == key => Some(&mut e.payload),
            _ => None,
        }
    }

    /// Insert a payload. Returns a key that is never reissued by this index.
    pub fn insert(&mut self, payload: P) -> Key {
        let serial = self.next_serial;
        self.next_serial += 1;
        let slot = self.free_list.pop().unwrap_or(self.entries.len());
        let key = Key::new(serial, slot);
        let entry = Some(Entry { key, payload });
        if slot == self.entries.len() {
            self.entries.push(entry);
        } else {
            self.entries[slot] = entry;
        }
        self.len += 1;
        self.order.push(slot);
        self.backend.insert(slot);
        key
    }

    /// Remove an entry, returning its payload if `key` was live.
    pub fn remove(&mut self, key: Key) -> Option<P> {
        let slot = key.slot();
        match self.entries.get(slot) {
            Some(Some(e)) if e.key == key => {}
            _ => return None,
        }
        let entry = self.entries[slot].take()?;
        self.backend.remove(slot);
        self.order.retain(|&s| s != slot);
        self.free_list.push(slot);
        self.len -= 1;
        Some(entry.payload)
    }

    /// Remove every entry. Keys issued before the clear stay retired.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.free_list.clear();
        self.order.clear();
        self.len = 0;
        self.backend.clear();
    }

    /// Let the backend re-establish its order from current values.
    ///
    /// Returns `true` if the cached order changed. A no-op for backends that
    /// keep no order.
    pub fn reorder<C: ?Sized>(&mut self, cx: &C) -> bool
    where
        P: Resolve<T, C>,
    {
        let view = View {
            entries: &self.entries,
            cx,
        };
        self.backend.reorder(&view)
    }

    /// Key of the floor entry for `pos`.
    ///
    /// The floor is the entry with the greatest value not exceeding `pos`;
    /// equal values go to the earliest inserted. When every value exceeds
    /// `pos` the lowest entry is returned instead. `None` only when empty.
    pub fn floor<C: ?Sized>(&self, pos: T, cx: &C) -> Option<Key>
    where
        P: Resolve<T, C>,
    {
        let view = View {
            entries: &self.entries,
            cx,
        };
        let slot = self.backend.floor(pos, &view)?;
        Some(Probe::<T>::key(&view, slot))
    }

    /// Resolve the current value of `key`.
    pub fn value<C: ?Sized>(&self, key: Key, cx: &C) -> Option<T>
    where
        P: Resolve<T, C>,
    {
        self.get(key).map(|p| p.resolve(cx))
    }

    /// Live entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &P)> + '_ {
        self.order.iter().filter_map(|&slot| {
            let e = self.entries.get(slot)?.as_ref()?;
            Some((e.key, &e.payload))
        })
    }
}

/// Default index using the linear scan backend.
pub type Index<T, P> = IndexGeneric<T, P, LinearScan>;

impl<T: Copy + PartialOrd + Debug, P> Default for Index<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialOrd + Debug, P> Index<T, P> {
    /// Create an index backed by a sorted array with binary-search queries.
    pub fn with_sorted() -> IndexGeneric<T, P, SortedVec> {
        IndexGeneric::with_backend(SortedVec::default())
    }
}
