// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position signals delivered by the host.

bitflags::bitflags! {
    /// What the host observed before asking the dispatcher to re-evaluate.
    ///
    /// Signals carry no payload; the dispatcher reads the scroll position and
    /// element positions from the [`Layout`](crate::layout::Layout) it is handed.
    /// Several flags may be combined when the host coalesces events.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Signal: u8 {
        /// The viewport scrolled.
        const SCROLL = 0b0000_0001;
        /// The viewport was resized.
        const RESIZE = 0b0000_0010;
        /// Content finished loading and layout settled.
        const LOAD   = 0b0000_0100;
        /// Signals after which breakpoint values may have moved relative to each other.
        const LAYOUT = Self::RESIZE.bits() | Self::LOAD.bits();
    }
}

impl Signal {
    /// Whether this signal may have changed resolved breakpoint values.
    pub const fn affects_layout(self) -> bool {
        self.intersects(Self::LAYOUT)
    }
}
