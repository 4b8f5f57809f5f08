// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll direction events, independent of breakpoints.
//!
//! ```
//! use waypost_scroll::direction::{DirectionTracker, ScrollDirection};
//!
//! let mut t = DirectionTracker::new();
//! assert_eq!(t.observe(0.0), None);
//! assert_eq!(t.observe(40.0), Some(ScrollDirection::Down));
//! assert_eq!(t.observe(10.0), Some(ScrollDirection::Up));
//! ```

use crate::layout::Layout;

/// Direction of a scroll step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Scroll offset did not increase.
    Up,
    /// Scroll offset increased.
    Down,
}

/// Classifies successive scroll offsets as up or down steps.
///
/// The first observation only primes the tracker. After that every
/// observation reports `Down` when the offset grew and `Up` otherwise,
/// including when it did not change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectionTracker {
    last: Option<f64>,
}

impl DirectionTracker {
    /// Create an unprimed tracker.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Create a tracker primed with the layout's current scroll offset.
    pub fn primed<L: Layout + ?Sized>(layout: &L) -> Self {
        Self {
            last: Some(layout.scroll_top()),
        }
    }

    /// Last observed offset.
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    /// Record a new scroll offset and classify the step from the previous one.
    pub fn observe(&mut self, top: f64) -> Option<ScrollDirection> {
        let previous = self.last.replace(top)?;
        Some(if top > previous {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        })
    }

    /// [`observe`](Self::observe) the layout's current scroll offset.
    pub fn observe_layout<L: Layout + ?Sized>(&mut self, layout: &L) -> Option<ScrollDirection> {
        self.observe(layout.scroll_top())
    }
}
