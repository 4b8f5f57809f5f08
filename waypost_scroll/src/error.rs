// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration errors.

use thiserror::Error;

/// Why a breakpoint could not be registered.
///
/// Registration fails fast; no breakpoint is created and no id is consumed
/// from the caller's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RegistrationError {
    /// A fixed threshold was NaN or infinite.
    #[error("breakpoint value must be finite, got {value}")]
    NonFiniteValue {
        /// The rejected value.
        value: f64,
    },
    /// The offset was NaN or infinite.
    #[error("breakpoint offset must be finite, got {offset}")]
    NonFiniteOffset {
        /// The rejected offset.
        offset: f64,
    },
}
