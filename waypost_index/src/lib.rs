// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Index: an ordered floor index over dynamically valued entries.
//!
//! Each entry is a payload that can [`Resolve`] its current value on demand.
//! The index answers one question: which entry is the *floor* of a position,
//! meaning the entry with the greatest value not exceeding it.
//!
//! - Insert and remove payloads; every insert gets a fresh, never-reissued [`Key`].
//! - Query the floor of a position. Values are resolved at query time, never cached.
//! - Equal values are ordered by insertion, so results are deterministic.
//! - When every value exceeds the position, the lowest entry is returned (clamp to first).
//!
//! It is generic over the scalar `T` and over a resolve context `C`, and knows
//! nothing about scrolling. Higher layers (like a scroll dispatcher) supply
//! payloads whose values depend on layout and pass a layout snapshot as `C`.
//!
//! # Example
//!
//! ```rust
//! use waypost_index::{Index, Resolve};
//!
//! struct Mark(i64);
//!
//! impl Resolve<i64, ()> for Mark {
//!     fn resolve(&self, _: &()) -> i64 {
//!         self.0
//!     }
//! }
//!
//! let mut idx: Index<i64, Mark> = Index::new();
//! let _top = idx.insert(Mark(0));
//! let mid = idx.insert(Mark(200));
//! let _end = idx.insert(Mark(500));
//!
//! assert_eq!(idx.floor(250, &()), Some(mid));
//! ```
//!
//! ## Choosing a backend
//!
//! - `LinearScan` (default): resolves every value on every query. Correct no matter
//!   how values move, and the reference behavior for the other backend.
//! - `SortedVec`: keeps entries sorted and binary searches, resolving only O(log n)
//!   values per query. Call [`IndexGeneric::reorder`] whenever values may have moved
//!   relative to each other (a relayout, say); until then queries use the old order.
//!   New entries are scanned linearly until a reorder places them.
//!
//! ```rust
//! use waypost_index::{Index, Resolve};
//!
//! struct Mark(f64);
//!
//! impl Resolve<f64, ()> for Mark {
//!     fn resolve(&self, _: &()) -> f64 {
//!         self.0
//!     }
//! }
//!
//! let mut idx = Index::<f64, Mark>::with_sorted();
//! let a = idx.insert(Mark(300.0));
//! let _b = idx.insert(Mark(300.0));
//!
//! // Ties go to the earlier insertion.
//! assert_eq!(idx.floor(300.0, &()), Some(a));
//! // Below every value: clamp to the lowest entry.
//! assert_eq!(idx.floor(-1.0, &()), Some(a));
//! ```
//!
//! ### Float semantics
//!
//! Resolved values should not be NaN. If one is, it never counts as "not
//! exceeding" a position and sorts after every other value, so it is only
//! returned as the clamp fallback when every value is NaN.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod index;
pub mod types;

pub use backend::{Backend, Probe};
pub use backends::linear::LinearScan;
pub use backends::sorted::SortedVec;
pub use index::{Index, IndexGeneric, Resolve};
pub use types::Key;
