// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed breakpoints along a long page.
//!
//! Registers a handler per section and scrolls through the page, printing the
//! section each transition activates. Scrolls that stay inside a section fire
//! nothing; a jump across several sections fires only the one landed in.
//!
//! Run:
//! - `cargo run -p waypost_demos --example scroll_breakpoints`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use waypost_scroll::{Dispatcher, PageLayout, Signal};

fn main() {
    let mut page: PageLayout<&str> = PageLayout::new(Size::new(1280.0, 4000.0));
    let active = Rc::new(RefCell::new(Vec::new()));

    let mut dispatcher = Dispatcher::new();
    for (name, top) in [("intro", 0.0), ("features", 800.0), ("pricing", 1800.0), ("faq", 3000.0)] {
        let active = active.clone();
        dispatcher
            .add(top, move || {
                println!("  -> {name}");
                active.borrow_mut().push(name);
            })
            .unwrap();
    }

    println!("load at 0");
    dispatcher.handle(Signal::LOAD, &page);

    for top in [120.0, 640.0, 810.0, 1000.0, 3200.0, 900.0, 0.0] {
        println!("scroll to {top}");
        page.scroll_to(top);
        dispatcher.handle(Signal::SCROLL, &page);
    }

    // 3200 jumps from "features" straight to "faq"; "pricing" never fires.
    assert_eq!(
        *active.borrow(),
        ["intro", "features", "faq", "features", "intro"]
    );
}
