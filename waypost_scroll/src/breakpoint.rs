// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoints and the sources their thresholds are resolved from.

use alloc::boxed::Box;
use core::fmt;

use waypost_index::{Key, Resolve};

use crate::error::RegistrationError;
use crate::layout::Layout;

/// Identity of a registered breakpoint.
///
/// Ids are issued in increasing order by their dispatcher and never reused,
/// so comparing two ids compares their registration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BreakpointId(pub(crate) Key);

impl BreakpointId {
    /// Registration serial within the owning dispatcher.
    pub const fn serial(self) -> u64 {
        self.0.serial()
    }
}

/// Where a breakpoint's threshold comes from.
///
/// The variant is fixed at construction; resolution dispatches on it without
/// inspecting anything else.
pub enum ValueSource<E> {
    /// A constant scroll offset.
    Fixed(f64),
    /// Recomputed on every query. May read live layout state through its captures.
    ///
    /// With a sorted dispatcher ([`Dispatcher::sorted`](crate::Dispatcher::sorted))
    /// the sorted position is only refreshed on layout signals. A value that
    /// moves past another breakpoint's between two scroll signals is not seen
    /// until the next [`Signal::RESIZE`](crate::Signal::RESIZE) or
    /// [`Signal::LOAD`](crate::Signal::LOAD).
    Computed(Box<dyn Fn() -> f64>),
    /// The top edge of a tracked element. Falls back to the document height
    /// when the element no longer resolves.
    ///
    /// Same caveat as [`Computed`](Self::Computed) for sorted dispatchers.
    Tracked(E),
}

impl<E> ValueSource<E> {
    /// Source that calls `f` on every query.
    pub fn computed(f: impl Fn() -> f64 + 'static) -> Self {
        Self::Computed(Box::new(f))
    }

    /// Source that follows `element`'s top edge.
    pub fn tracked(element: E) -> Self {
        Self::Tracked(element)
    }

    /// Resolve the current threshold against `layout`.
    pub fn resolve<L>(&self, layout: &L) -> f64
    where
        L: Layout<Element = E> + ?Sized,
    {
        match self {
            Self::Fixed(v) => *v,
            Self::Computed(f) => f(),
            Self::Tracked(element) => layout
                .element_top(element)
                .unwrap_or_else(|| layout.document_height()),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RegistrationError> {
        match *self {
            Self::Fixed(value) if !value.is_finite() => {
                Err(RegistrationError::NonFiniteValue { value })
            }
            _ => Ok(()),
        }
    }
}

impl<E> From<f64> for ValueSource<E> {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl<E: fmt::Debug> fmt::Debug for ValueSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
            Self::Tracked(e) => f.debug_tuple("Tracked").field(e).finish(),
        }
    }
}

/// A threshold paired with the handler to run when it becomes active.
pub struct Breakpoint<E> {
    source: ValueSource<E>,
    offset: f64,
    handler: Box<dyn FnMut()>,
}

impl<E> Breakpoint<E> {
    /// Build a breakpoint, rejecting non-finite fixed values and offsets.
    pub fn new(
        source: ValueSource<E>,
        offset: f64,
        handler: impl FnMut() + 'static,
    ) -> Result<Self, RegistrationError> {
        source.validate()?;
        if !offset.is_finite() {
            return Err(RegistrationError::NonFiniteOffset { offset });
        }
        Ok(Self {
            source,
            offset,
            handler: Box::new(handler),
        })
    }

    /// The value source.
    pub fn source(&self) -> &ValueSource<E> {
        &self.source
    }

    /// Offset added to the resolved source value.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Resolved threshold: source value plus offset.
    pub fn value<L>(&self, layout: &L) -> f64
    where
        L: Layout<Element = E> + ?Sized,
    {
        self.source.resolve(layout) + self.offset
    }

    pub(crate) fn fire(&mut self) {
        (self.handler)();
    }
}

impl<E, L> Resolve<f64, L> for Breakpoint<E>
where
    L: Layout<Element = E> + ?Sized,
{
    fn resolve(&self, layout: &L) -> f64 {
        self.value(layout)
    }
}

impl<E: fmt::Debug> fmt::Debug for Breakpoint<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Breakpoint")
            .field("source", &self.source)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
