// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different ordering strategies.
//!
//! - `linear`: unsorted slot list, every query resolves every value. O(n) per query.
//! - `sorted`: slots kept in value order, queries binary search. O(log n) per query,
//!   O(n log n) per [`reorder`](crate::Backend::reorder).
//!
//! Both produce the same floor for the same values. The sorted backend only
//! agrees with the linear one while its cached order matches the live values,
//! so callers must reorder whenever values may have moved relative to each other.

pub mod linear;
pub mod sorted;
