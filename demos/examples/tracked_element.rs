// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoints that follow elements as layout changes.
//!
//! A tracked breakpoint resolves to its element's top edge every time it is
//! queried. This demo uses the sorted dispatcher, so it forwards a resize
//! signal after moving content around; removing the element pins the
//! breakpoint to the document height.
//!
//! Run:
//! - `cargo run -p waypost_demos --example tracked_element`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Size};
use waypost_scroll::{Dispatcher, PageLayout, Signal, ValueSource};

fn main() {
    let mut page = PageLayout::new(Size::new(1280.0, 5000.0));
    page.place("#gallery", Rect::new(0.0, 1500.0, 1280.0, 2500.0));

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::sorted();

    let l = log.clone();
    let top = dispatcher
        .add(0.0, move || l.borrow_mut().push("top"))
        .unwrap();
    let l = log.clone();
    let gallery = dispatcher
        .add_with_offset(ValueSource::tracked("#gallery"), -200.0, move || {
            l.borrow_mut().push("gallery")
        })
        .unwrap();

    page.scroll_to(1000.0);
    assert_eq!(dispatcher.handle(Signal::LOAD, &page), Some(top));
    println!("at 1000: gallery threshold {:?}", dispatcher.value_of(gallery, &page));

    // A banner above the gallery collapsed; the gallery moves up under the viewport.
    page.move_to(&"#gallery", 1100.0);
    let hit = dispatcher.handle(Signal::RESIZE, &page);
    println!("after resize: activated {hit:?}");
    assert_eq!(hit, Some(gallery));

    // Gallery removed: its threshold becomes the document height.
    page.remove(&"#gallery");
    assert_eq!(dispatcher.value_of(gallery, &page), Some(4800.0));
    assert_eq!(dispatcher.handle(Signal::RESIZE, &page), Some(top));

    println!("fired: {:?}", log.borrow());
    assert_eq!(*log.borrow(), ["top", "gallery", "top"]);
}
