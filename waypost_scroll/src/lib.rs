// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Scroll: fire a handler whenever the active scroll breakpoint changes.
//!
//! ## Overview
//!
//! A *breakpoint* is a scroll threshold paired with a handler. As the page
//! scrolls, the *active* breakpoint is the one with the greatest threshold
//! not exceeding the scroll offset (or the lowest one while the page is
//! scrolled above all of them). Whenever a signal changes which breakpoint is
//! active, the [`Dispatcher`](crate::dispatcher::Dispatcher) runs the new one's
//! handler exactly once.
//!
//! This crate does not subscribe to browser or windowing events. The host
//! forwards them as [`Signal`](crate::signal::Signal)s together with a
//! [`Layout`](crate::layout::Layout) to read positions from.
//!
//! ## Thresholds
//!
//! A [`ValueSource`](crate::breakpoint::ValueSource) is one of:
//! - `Fixed`: a constant offset.
//! - `Computed`: a closure re-run on every query.
//! - `Tracked`: an element's top edge. When the element is gone the threshold
//!   becomes the document height, pinning the breakpoint past the end of content.
//!
//! Each breakpoint also carries a signed offset added to its source value.
//!
//! ## Workflow
//!
//! 1) Create a dispatcher — [`Dispatcher::new`](crate::dispatcher::Dispatcher::new)
//!    resolves every breakpoint per signal; [`Dispatcher::sorted`](crate::dispatcher::Dispatcher::sorted)
//!    binary searches a sorted order refreshed on layout signals.
//! 2) Register breakpoints with `add`/`add_with_offset`; keep the returned ids to `remove` them.
//! 3) Forward host events: `handle(Signal::SCROLL, &layout)` on scroll,
//!    `Signal::RESIZE`/`Signal::LOAD` when layout may have moved.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Rect, Size};
//! use waypost_scroll::{Dispatcher, PageLayout, Signal, ValueSource};
//!
//! let mut page = PageLayout::new(Size::new(1280.0, 6000.0));
//! page.place("#pricing", Rect::new(0.0, 2400.0, 1280.0, 3100.0));
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut dispatcher = Dispatcher::new();
//! let s = seen.clone();
//! dispatcher.add(0.0, move || s.borrow_mut().push("hero")).unwrap();
//! let s = seen.clone();
//! dispatcher
//!     .add_with_offset(ValueSource::tracked("#pricing"), -100.0, move || {
//!         s.borrow_mut().push("pricing")
//!     })
//!     .unwrap();
//!
//! dispatcher.handle(Signal::LOAD, &page);
//! page.scroll_to(2350.0);
//! dispatcher.handle(Signal::SCROLL, &page);
//! page.scroll_to(2360.0);
//! dispatcher.handle(Signal::SCROLL, &page);
//!
//! assert_eq!(*seen.borrow(), ["hero", "pricing"]);
//! ```
//!
//! ## Scroll direction
//!
//! [`DirectionTracker`](crate::direction::DirectionTracker) classifies
//! successive offsets as up or down steps, for hosts that want
//! "scrolled down"/"scrolled up" events alongside breakpoints.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `debug!` events on registration, removal and transitions,
//!   and `trace!` events for signals that change nothing.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod breakpoint;
pub mod direction;
pub mod dispatcher;
pub mod error;
pub mod layout;
pub mod signal;

pub use breakpoint::{Breakpoint, BreakpointId, ValueSource};
pub use direction::{DirectionTracker, ScrollDirection};
pub use dispatcher::{Dispatcher, DispatcherGeneric};
pub use error::RegistrationError;
pub use layout::{Layout, PageLayout};
pub use signal::Signal;
