// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only access to the host's layout, and an in-memory page model.
//!
//! The dispatcher never owns layout state. Each signal hands it a [`Layout`]
//! to read the current scroll position and tracked element positions from.
//! Hosts with a real layout engine implement [`Layout`] over it; tests, demos
//! and headless hosts can use [`PageLayout`].

use alloc::collections::BTreeMap;

use kurbo::{Rect, Size};

/// Layout queries the dispatcher needs from its host.
///
/// All positions are document coordinates with y growing downward.
pub trait Layout {
    /// Handle the host uses to name a trackable element (an id, a selector, ...).
    type Element;

    /// Current vertical scroll offset of the viewport.
    fn scroll_top(&self) -> f64;

    /// Top edge of `element` relative to the document, or `None` if the
    /// element no longer resolves to a live element.
    fn element_top(&self, element: &Self::Element) -> Option<f64>;

    /// Total height of the document content.
    fn document_height(&self) -> f64;
}

impl<L: Layout + ?Sized> Layout for &L {
    type Element = L::Element;

    fn scroll_top(&self) -> f64 {
        (**self).scroll_top()
    }

    fn element_top(&self, element: &Self::Element) -> Option<f64> {
        (**self).element_top(element)
    }

    fn document_height(&self) -> f64 {
        (**self).document_height()
    }
}

/// In-memory page: element bounds, document size and a scroll offset.
///
/// ```
/// use kurbo::{Rect, Size};
/// use waypost_scroll::layout::{Layout, PageLayout};
///
/// let mut page = PageLayout::new(Size::new(800.0, 3000.0));
/// page.place("#footer", Rect::new(0.0, 2800.0, 800.0, 3000.0));
/// assert_eq!(page.element_top(&"#footer"), Some(2800.0));
///
/// page.remove(&"#footer");
/// assert_eq!(page.element_top(&"#footer"), None);
/// assert_eq!(page.document_height(), 3000.0);
/// ```
#[derive(Clone, Debug)]
pub struct PageLayout<E> {
    document: Size,
    scroll_top: f64,
    elements: BTreeMap<E, Rect>,
}

impl<E: Ord> PageLayout<E> {
    /// Create an empty page of the given document size, scrolled to the top.
    pub fn new(document: Size) -> Self {
        Self {
            document,
            scroll_top: 0.0,
            elements: BTreeMap::new(),
        }
    }

    /// Document size.
    pub fn document(&self) -> Size {
        self.document
    }

    /// Resize the document (content grew or shrank).
    pub fn set_document(&mut self, document: Size) {
        self.document = document;
    }

    /// Set the scroll offset.
    pub fn scroll_to(&mut self, top: f64) {
        self.scroll_top = top;
    }

    /// Scroll by a signed delta.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_top += delta;
    }

    /// Place (or replace) an element's bounds.
    pub fn place(&mut self, element: E, bounds: Rect) {
        self.elements.insert(element, bounds);
    }

    /// Move an element vertically so its top edge sits at `top`, keeping its size.
    ///
    /// Returns `false` if the element is not on the page.
    pub fn move_to(&mut self, element: &E, top: f64) -> bool {
        let Some(bounds) = self.elements.get_mut(element) else {
            return false;
        };
        *bounds = Rect::new(bounds.x0, top, bounds.x1, top + bounds.height());
        true
    }

    /// Take an element off the page, returning its last bounds.
    pub fn remove(&mut self, element: &E) -> Option<Rect> {
        self.elements.remove(element)
    }

    /// Bounds of an element, if present.
    pub fn bounds(&self, element: &E) -> Option<Rect> {
        self.elements.get(element).copied()
    }
}

impl<E: Ord> Layout for PageLayout<E> {
    type Element = E;

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn element_top(&self, element: &E) -> Option<f64> {
        self.elements.get(element).map(Rect::min_y)
    }

    fn document_height(&self) -> f64 {
        self.document.height
    }
}
