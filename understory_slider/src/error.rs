// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error kinds and the reporter capability used in place of panicking.
//!
//! Slider errors are never fatal. Operations that hit one report it through an
//! [`ErrorSink`] and continue with a degraded default (usually position `0`).
//! The `try_*` methods on [`Control`](crate::Control) return the kind directly
//! for callers that prefer a `Result`.

use core::fmt;

/// The kinds of error a slider can report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value could not be resolved to a position: not in `data`, not
    /// numeric, or not on a step boundary.
    Value,
    /// `max - min` is not an exact multiple of `interval`.
    Interval,
    /// A numeric value is below `min`.
    Min,
    /// A numeric value is above `max`.
    Max,
}

impl ErrorKind {
    /// Human-readable description passed to the sink alongside the kind.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Value => "the value cannot be resolved to a position in the slider domain",
            Self::Interval => "invalid interval: (max - min) must be divisible by interval",
            Self::Min => "the value must be greater than or equal to min",
            Self::Max => "the value must be less than or equal to max",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for ErrorKind {}

/// Receives errors reported by a [`Control`](crate::Control).
///
/// Implemented for every `Fn(ErrorKind, &str)` closure, so a callback can be
/// passed directly:
///
/// ```
/// use core::cell::Cell;
/// use understory_slider::{Control, ErrorKind, SliderConfig};
///
/// let last = Cell::new(None);
/// let _slider = Control::with_error_sink(
///     SliderConfig::default(),
///     500,
///     |kind: ErrorKind, _msg: &str| last.set(Some(kind)),
/// );
/// assert_eq!(last.get(), Some(ErrorKind::Max));
/// ```
pub trait ErrorSink {
    /// Called synchronously each time an error is hit.
    fn report(&self, kind: ErrorKind, message: &str);
}

impl<F: Fn(ErrorKind, &str)> ErrorSink for F {
    fn report(&self, kind: ErrorKind, message: &str) {
        self(kind, message);
    }
}

/// A sink that drops every error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Silent;

impl ErrorSink for Silent {
    fn report(&self, _kind: ErrorKind, _message: &str) {}
}
