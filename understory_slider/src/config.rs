// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration, fixed at construction.

use alloc::vec::Vec;

use bitflags::bitflags;
use rust_decimal::Decimal;

use crate::domain::Domain;
use crate::value::SliderValue;

bitflags! {
    /// Behavior flags for handle movement.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SliderFlags: u8 {
        /// Handles may pass each other.
        const ENABLE_CROSS = 0b0000_0001;
        /// Dragging one handle translates every handle by the same delta.
        const FIXED        = 0b0000_0010;
    }
}

impl Default for SliderFlags {
    fn default() -> Self {
        Self::ENABLE_CROSS
    }
}

/// Configuration for a [`Control`](crate::Control).
///
/// Build with struct-update syntax:
///
/// ```
/// use understory_slider::{SliderConfig, SliderFlags};
/// use rust_decimal::Decimal;
///
/// let config = SliderConfig {
///     max: Decimal::from(10),
///     flags: SliderFlags::empty(),
///     min_range: Some(2),
///     ..Default::default()
/// };
/// assert!(!config.enable_cross());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Discrete list of allowed values. When set, it takes precedence over
    /// `min`/`max`/`interval`.
    pub data: Option<Vec<SliderValue>>,
    /// Lower bound of the numeric range.
    pub min: Decimal,
    /// Upper bound of the numeric range.
    pub max: Decimal,
    /// Step size of the numeric range.
    pub interval: Decimal,
    /// Minimum distance between adjacent handles, in steps.
    pub min_range: Option<usize>,
    /// Maximum distance between adjacent handles, in steps.
    ///
    /// Converted by [`Control::max_range_dir`](crate::Control::max_range_dir)
    /// but not enforced when resolving handle ranges.
    pub max_range: Option<usize>,
    /// Movement flags.
    pub flags: SliderFlags,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            data: None,
            min: Decimal::ZERO,
            max: Decimal::ONE_HUNDRED,
            interval: Decimal::ONE,
            min_range: None,
            max_range: None,
            flags: SliderFlags::default(),
        }
    }
}

impl SliderConfig {
    /// Replace the movement flags.
    pub fn with_flags(mut self, flags: SliderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether handles may pass each other.
    pub fn enable_cross(&self) -> bool {
        self.flags.contains(SliderFlags::ENABLE_CROSS)
    }

    /// Whether drags move all handles together.
    pub fn fixed(&self) -> bool {
        self.flags.contains(SliderFlags::FIXED)
    }

    /// The active value domain.
    pub fn domain(&self) -> Domain<'_> {
        match &self.data {
            Some(data) => Domain::Data(data),
            None => Domain::Range {
                min: self.min,
                max: self.max,
                interval: self.interval,
            },
        }
    }

    /// `min_range`, with zero treated as unset.
    pub(crate) fn effective_min_range(&self) -> Option<usize> {
        self.min_range.filter(|&r| r > 0)
    }

    /// `max_range`, with zero treated as unset.
    pub(crate) fn effective_max_range(&self) -> Option<usize> {
        self.max_range.filter(|&r| r > 0)
    }
}
