// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll dispatcher: turns position signals into breakpoint transitions.
//!
//! ## State machine
//!
//! - No breakpoint is active until the first signal arrives with at least one
//!   breakpoint registered. Registering does not fire anything.
//! - On every signal the floor match for the current scroll position is
//!   recomputed. If it differs from the active breakpoint, the active
//!   breakpoint is replaced and exactly the new one's handler runs once.
//!   Breakpoints jumped over in a single signal never fire.
//! - If the floor match is unchanged, nothing fires.
//! - Removing the active breakpoint clears the active slot; the next signal
//!   selects (and fires) the floor match among the remaining breakpoints.
//!
//! Handlers are called synchronously from [`DispatcherGeneric::handle`]. A
//! panicking handler is not caught; the dispatcher has already recorded the
//! new active breakpoint by then.

use waypost_index::{Backend, IndexGeneric, LinearScan, SortedVec};

use crate::breakpoint::{Breakpoint, BreakpointId, ValueSource};
use crate::error::RegistrationError;
use crate::layout::Layout;
use crate::signal::Signal;

/// Breakpoint dispatcher over a chosen index backend.
///
/// `E` is the host's element handle type (see [`Layout::Element`]).
/// Use [`Dispatcher`] for the linear scan backend or [`Dispatcher::sorted`]
/// for the binary search backend.
#[derive(Debug)]
pub struct DispatcherGeneric<E, B> {
    index: IndexGeneric<f64, Breakpoint<E>, B>,
    current: Option<BreakpointId>,
    stale: bool,
}

/// Dispatcher using the linear scan backend.
///
/// Every signal resolves every breakpoint, so values may change at any time,
/// including between two scroll signals with no layout signal in between.
pub type Dispatcher<E> = DispatcherGeneric<E, LinearScan>;

impl<E> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Dispatcher<E> {
    /// Create a dispatcher that resolves every breakpoint on every signal.
    pub fn new() -> Self {
        DispatcherGeneric::with_backend(LinearScan::default())
    }

    /// Create a dispatcher that keeps breakpoints sorted and binary searches.
    ///
    /// The order is refreshed on [`Signal::LAYOUT`] signals and after
    /// registrations. Hosts must send a layout signal whenever tracked or
    /// computed values may have moved past each other.
    pub fn sorted() -> DispatcherGeneric<E, SortedVec> {
        DispatcherGeneric::with_backend(SortedVec::default())
    }
}

impl<E, B: Backend<f64>> DispatcherGeneric<E, B> {
    /// Create a dispatcher over an explicit index backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            index: IndexGeneric::with_backend(backend),
            current: None,
            stale: false,
        }
    }

    /// Register a breakpoint with no offset.
    ///
    /// Does not fire the handler, even if the breakpoint would be active at
    /// the current scroll position; the next signal decides.
    pub fn add(
        &mut self,
        source: impl Into<ValueSource<E>>,
        handler: impl FnMut() + 'static,
    ) -> Result<BreakpointId, RegistrationError> {
        self.add_with_offset(source, 0.0, handler)
    }

    /// Register a breakpoint whose threshold is its source value plus `offset`.
    pub fn add_with_offset(
        &mut self,
        source: impl Into<ValueSource<E>>,
        offset: f64,
        handler: impl FnMut() + 'static,
    ) -> Result<BreakpointId, RegistrationError> {
        let breakpoint = Breakpoint::new(source.into(), offset, handler)?;
        let id = BreakpointId(self.index.insert(breakpoint));
        self.stale = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "waypost.breakpoint.add",
            id = id.serial(),
            offset,
            count = self.index.len()
        );
        Ok(id)
    }

    /// Remove a breakpoint. Returns `false` if `id` is unknown or already removed.
    ///
    /// Removing the active breakpoint leaves no breakpoint active until the
    /// next signal.
    pub fn remove(&mut self, id: BreakpointId) -> bool {
        if self.index.remove(id.0).is_none() {
            return false;
        }
        let was_active = self.current == Some(id);
        if was_active {
            self.current = None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "waypost.breakpoint.remove",
            id = id.serial(),
            was_active,
            count = self.index.len()
        );
        true
    }

    /// Remove every breakpoint and forget the active one.
    pub fn clear(&mut self) {
        self.index.clear();
        self.current = None;
        self.stale = false;
    }

    /// Re-evaluate after `signal`, reading positions from `layout`.
    ///
    /// Returns the id of the breakpoint this signal activated (whose handler
    /// was just called), or `None` if the active breakpoint did not change.
    pub fn handle<L>(&mut self, signal: Signal, layout: &L) -> Option<BreakpointId>
    where
        L: Layout<Element = E> + ?Sized,
    {
        if self.stale || signal.affects_layout() {
            let _moved = self.index.reorder(layout);
            self.stale = false;
            #[cfg(feature = "tracing")]
            {
                if _moved {
                    tracing::trace!(message = "waypost.index.reorder", signal = ?signal);
                }
            }
        }

        let top = layout.scroll_top();
        let next = self.index.floor(top, layout).map(BreakpointId);
        if next == self.current {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "waypost.signal.idle", signal = ?signal, top);
            return None;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "waypost.transition",
            signal = ?signal,
            top,
            from = self.current.map(BreakpointId::serial),
            to = next.map(BreakpointId::serial)
        );
        self.current = next;
        let id = next?;
        if let Some(breakpoint) = self.index.get_mut(id.0) {
            breakpoint.fire();
        }
        Some(id)
    }

    /// Shorthand for [`handle`](Self::handle) with [`Signal::SCROLL`].
    pub fn scrolled<L>(&mut self, layout: &L) -> Option<BreakpointId>
    where
        L: Layout<Element = E> + ?Sized,
    {
        self.handle(Signal::SCROLL, layout)
    }

    /// The active breakpoint, if any.
    pub fn active(&self) -> Option<BreakpointId> {
        self.current
    }

    /// Number of registered breakpoints.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if no breakpoints are registered.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether `id` is still registered.
    pub fn contains(&self, id: BreakpointId) -> bool {
        self.index.contains(id.0)
    }

    /// Borrow a registered breakpoint.
    pub fn get(&self, id: BreakpointId) -> Option<&Breakpoint<E>> {
        self.index.get(id.0)
    }

    /// Current resolved threshold of `id`.
    pub fn value_of<L>(&self, id: BreakpointId, layout: &L) -> Option<f64>
    where
        L: Layout<Element = E> + ?Sized,
    {
        self.index.value(id.0, layout)
    }

    /// Registered breakpoint ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = BreakpointId> + '_ {
        self.index.iter().map(|(key, _)| BreakpointId(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageLayout;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::{Rect, Size};

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn page() -> PageLayout<&'static str> {
        PageLayout::new(Size::new(1024.0, 4000.0))
    }

    fn recorder(log: &Log, name: &'static str) -> impl FnMut() + 'static {
        let log = log.clone();
        move || log.borrow_mut().push(name)
    }

    fn scroll_to<B: Backend<f64>>(
        d: &mut DispatcherGeneric<&'static str, B>,
        page: &mut PageLayout<&'static str>,
        top: f64,
    ) -> Option<BreakpointId> {
        page.scroll_to(top);
        d.scrolled(&*page)
    }

    #[test]
    fn floor_selects_greatest_not_exceeding() {
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.add(0.0, recorder(&log, "top")).unwrap();
        let mid = d.add(200.0, recorder(&log, "mid")).unwrap();
        d.add(500.0, recorder(&log, "end")).unwrap();
        let mut page = page();
        assert_eq!(scroll_to(&mut d, &mut page, 250.0), Some(mid));
        assert_eq!(*log.borrow(), vec!["mid"]);
    }

    #[test]
    fn registering_fires_nothing_until_a_signal() {
        let log = Log::default();
        let mut d = Dispatcher::new();
        let first = d.add(0.0, recorder(&log, "first")).unwrap();
        assert!(log.borrow().is_empty());
        assert_eq!(d.active(), None);
        assert_eq!(d.handle(Signal::LOAD, &page()), Some(first));
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn same_match_does_not_refire() {
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.add(100.0, recorder(&log, "a")).unwrap();
        let mut page = page();
        assert!(scroll_to(&mut d, &mut page, 120.0).is_some());
        assert_eq!(scroll_to(&mut d, &mut page, 130.0), None);
        assert_eq!(d.handle(Signal::RESIZE, &page), None);
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn jump_fires_only_the_landing_breakpoint() {
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.add(0.0, recorder(&log, "0")).unwrap();
        d.add(100.0, recorder(&log, "100")).unwrap();
        d.add(200.0, recorder(&log, "200")).unwrap();
        let mut page = page();
        scroll_to(&mut d, &mut page, 50.0);
        scroll_to(&mut d, &mut page, 250.0);
        assert_eq!(*log.borrow(), vec!["0", "200"]);
    }

    #[test]
    fn clamps_to_lowest_above_position() {
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.add(400.0, recorder(&log, "high")).unwrap();
        let low = d.add(300.0, recorder(&log, "low")).unwrap();
        let mut page = page();
        assert_eq!(scroll_to(&mut d, &mut page, 0.0), Some(low));
    }

    #[test]
    fn removing_active_reselects_from_remaining() {
        let log = Log::default();
        let mut d = Dispatcher::new();
        let a = d.add(0.0, recorder(&log, "a")).unwrap();
        let b = d.add(200.0, recorder(&log, "b")).unwrap();
        let mut page = page();
        assert_eq!(scroll_to(&mut d, &mut page, 250.0), Some(b));
        assert!(d.remove(b));
        assert_eq!(d.active(), None);
        assert_eq!(scroll_to(&mut d, &mut page, 250.0), Some(a));
        assert_eq!(d.active(), Some(a));
        assert!(!d.contains(b));
        assert_eq!(*log.borrow(), vec!["b", "a"]);
    }

    #[test]
    fn removing_inactive_keeps_active() {
        let mut d = Dispatcher::new();
        let a = d.add(0.0, || {}).unwrap();
        let b = d.add(200.0, || {}).unwrap();
        let mut page = page();
        scroll_to(&mut d, &mut page, 10.0);
        assert!(d.remove(b));
        assert_eq!(d.active(), Some(a));
        assert_eq!(scroll_to(&mut d, &mut page, 300.0), None);
    }

    #[test]
    fn ties_go_to_first_registered() {
        let log = Log::default();
        let mut d = Dispatcher::sorted();
        let a = d.add(300.0, recorder(&log, "a")).unwrap();
        d.add(300.0, recorder(&log, "b")).unwrap();
        let mut page = page();
        assert_eq!(scroll_to(&mut d, &mut page, 300.0), Some(a));
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn tracked_element_moves_without_reregistration() {
        let log = Log::default();
        let mut page = page();
        page.place("#chapter-2", Rect::new(0.0, 1200.0, 1024.0, 2000.0));
        let mut d = Dispatcher::new();
        let intro = d.add(0.0, recorder(&log, "intro")).unwrap();
        let chapter = d
            .add(ValueSource::tracked("#chapter-2"), recorder(&log, "chapter"))
            .unwrap();
        assert_eq!(scroll_to(&mut d, &mut page, 900.0), Some(intro));
        page.move_to(&"#chapter-2", 800.0);
        assert_eq!(scroll_to(&mut d, &mut page, 900.0), Some(chapter));
        assert_eq!(d.value_of(chapter, &page), Some(800.0));
    }

    #[test]
    fn sorted_backend_reorders_on_layout_signal() {
        let log = Log::default();
        let mut page = page();
        page.place("#a", Rect::new(0.0, 100.0, 10.0, 110.0));
        page.place("#b", Rect::new(0.0, 500.0, 10.0, 510.0));
        let mut d = Dispatcher::sorted();
        let a = d.add(ValueSource::tracked("#a"), recorder(&log, "a")).unwrap();
        let b = d.add(ValueSource::tracked("#b"), recorder(&log, "b")).unwrap();
        assert_eq!(scroll_to(&mut d, &mut page, 200.0), Some(a));
        // Swap the elements, then report the relayout.
        page.move_to(&"#a", 600.0);
        page.move_to(&"#b", 50.0);
        assert_eq!(d.handle(Signal::RESIZE, &page), Some(b));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn vanished_element_pins_past_end_of_content() {
        let mut page = page();
        page.place("#ad", Rect::new(0.0, 300.0, 10.0, 400.0));
        let mut d = Dispatcher::new();
        let start = d.add(0.0, || {}).unwrap();
        let ad = d.add(ValueSource::tracked("#ad"), || {}).unwrap();
        assert_eq!(scroll_to(&mut d, &mut page, 350.0), Some(ad));
        page.remove(&"#ad");
        assert_eq!(d.value_of(ad, &page), Some(4000.0));
        assert_eq!(d.handle(Signal::LOAD, &page), Some(start));
    }

    #[test]
    fn add_remove_round_trip() {
        let mut d: Dispatcher<&str> = Dispatcher::new();
        let id = d.add(10.0, || {}).unwrap();
        assert!(d.remove(id));
        assert!(!d.remove(id));
        assert!(d.is_empty());
    }

    #[test]
    fn empty_dispatcher_is_inert() {
        let mut d: Dispatcher<&str> = Dispatcher::new();
        assert_eq!(d.handle(Signal::all(), &page()), None);
        assert_eq!(d.active(), None);
    }

    #[test]
    fn rejected_registration_creates_nothing() {
        let mut d: Dispatcher<&str> = Dispatcher::new();
        let err = d.add(f64::INFINITY, || {}).unwrap_err();
        assert_eq!(err, RegistrationError::NonFiniteValue { value: f64::INFINITY });
        assert!(d.add_with_offset(0.0, f64::NAN, || {}).is_err());
        assert!(d.is_empty());
    }

    #[test]
    fn ids_are_monotonic_and_listed_in_registration_order() {
        let mut d: Dispatcher<&str> = Dispatcher::new();
        let a = d.add(30.0, || {}).unwrap();
        let b = d.add(10.0, || {}).unwrap();
        d.remove(a);
        let c = d.add(20.0, || {}).unwrap();
        assert!(a < b && b < c);
        assert_eq!(d.ids().collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn clear_forgets_active() {
        let mut d = Dispatcher::new();
        d.add(0.0, || {}).unwrap();
        let mut page = page();
        assert!(scroll_to(&mut d, &mut page, 5.0).is_some());
        d.clear();
        assert_eq!(d.active(), None);
        assert_eq!(scroll_to(&mut d, &mut page, 5.0), None);
    }
}
