// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll direction alongside a computed breakpoint.
//!
//! A sticky header shows while scrolling up and hides while scrolling down,
//! driven by `DirectionTracker`. Independently, a computed breakpoint at
//! "one viewport down" switches the header into its compact style; the
//! viewport height lives in a shared cell the closure reads on every query.
//!
//! Run:
//! - `cargo run -p waypost_demos --example scroll_direction`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Size;
use waypost_scroll::{DirectionTracker, Dispatcher, PageLayout, ScrollDirection, Signal, ValueSource};

#[derive(Debug, Default)]
struct Header {
    visible: bool,
    compact: bool,
}

fn main() {
    let mut page: PageLayout<()> = PageLayout::new(Size::new(1280.0, 6000.0));
    let viewport = Rc::new(Cell::new(720.0));
    let header = Rc::new(RefCell::new(Header {
        visible: true,
        compact: false,
    }));

    let mut dispatcher = Dispatcher::new();
    let h = header.clone();
    dispatcher
        .add(0.0, move || h.borrow_mut().compact = false)
        .unwrap();
    let h = header.clone();
    let vp = viewport.clone();
    dispatcher
        .add(ValueSource::computed(move || vp.get()), move || {
            h.borrow_mut().compact = true
        })
        .unwrap();

    let mut direction = DirectionTracker::primed(&page);
    dispatcher.handle(Signal::LOAD, &page);

    for top in [200.0, 900.0, 850.0, 300.0] {
        page.scroll_to(top);
        if let Some(dir) = direction.observe_layout(&page) {
            header.borrow_mut().visible = dir == ScrollDirection::Up;
        }
        dispatcher.handle(Signal::SCROLL, &page);
        println!("scroll {top:>5}: {:?}", header.borrow());
    }

    let h = header.borrow();
    assert!(h.visible);
    assert!(!h.compact);
    drop(h);

    page.scroll_to(950.0);
    direction.observe_layout(&page);
    dispatcher.handle(Signal::SCROLL, &page);
    assert!(header.borrow().compact);

    // A taller viewport moves the compact threshold past the current offset.
    viewport.set(1000.0);
    dispatcher.handle(Signal::RESIZE, &page);
    println!("resize at 950: {:?}", header.borrow());
    assert!(!header.borrow().compact);
}
