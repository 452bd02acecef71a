// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value domains and the step arithmetic behind value/position conversion.
//!
//! A domain is either a discrete `data` list or a numeric range with a fixed
//! interval. Both are reduced to a step count (`total`) and a step index per
//! value; positions are then `index * 100 / total` percent along the track.
//!
//! Everything that touches semantic numbers goes through [`Decimal`], so
//! `(value - min) / interval` never drifts. Only the percentage side uses `f64`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::ErrorKind;
use crate::value::SliderValue;

/// A borrowed view of the active value domain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Domain<'a> {
    /// Explicit ordered list of allowed values.
    Data(&'a [SliderValue]),
    /// Numeric range `[min, max]` stepping by `interval`.
    Range {
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
        /// Step size.
        interval: Decimal,
    },
}

impl Domain<'_> {
    /// Number of steps in the domain.
    ///
    /// For a range this is `(max - min) / interval`, which must be a
    /// non-negative integer; otherwise [`ErrorKind::Interval`]. An empty data
    /// list has no steps and resolves to `0`.
    pub fn total(&self) -> Result<usize, ErrorKind> {
        match *self {
            Self::Data(data) => Ok(data.len().saturating_sub(1)),
            Self::Range { min, max, interval } => {
                let steps = max
                    .checked_sub(min)
                    .and_then(|span| span.checked_div(interval))
                    .ok_or(ErrorKind::Interval)?;
                if steps.is_sign_negative() || !steps.fract().is_zero() {
                    return Err(ErrorKind::Interval);
                }
                steps.to_usize().ok_or(ErrorKind::Interval)
            }
        }
    }

    /// Step index of `value`.
    ///
    /// Range domains check bounds first ([`ErrorKind::Min`] /
    /// [`ErrorKind::Max`]) and then require the value to sit exactly on a
    /// step. Anything else unresolvable is [`ErrorKind::Value`].
    pub fn index_of_value(&self, value: &SliderValue) -> Result<usize, ErrorKind> {
        match *self {
            Self::Data(data) => data.iter().position(|v| v == value).ok_or(ErrorKind::Value),
            Self::Range { min, max, interval } => {
                let v = value.to_decimal().ok_or(ErrorKind::Value)?;
                if v < min {
                    return Err(ErrorKind::Min);
                }
                if v > max {
                    return Err(ErrorKind::Max);
                }
                let index = v
                    .checked_sub(min)
                    .and_then(|offset| offset.checked_div(interval))
                    .ok_or(ErrorKind::Value)?;
                if !index.fract().is_zero() {
                    return Err(ErrorKind::Value);
                }
                index.to_usize().ok_or(ErrorKind::Value)
            }
        }
    }

    /// Value at step `index`.
    ///
    /// Returns `None` only when there is no such value: an empty data list,
    /// or decimal overflow computing `min + index * interval`.
    pub fn value_of_index(&self, index: usize) -> Option<SliderValue> {
        match *self {
            Self::Data(data) => data.get(index).cloned(),
            Self::Range { min, interval, .. } => Decimal::from(index)
                .checked_mul(interval)
                .and_then(|offset| offset.checked_add(min))
                .map(SliderValue::Number),
        }
    }
}

/// Percentage position of step `index` in a domain of `total` steps.
///
/// A degenerate domain (`total == 0`) places everything at `0`.
pub fn step_pos(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    // Multiply before dividing so the last step lands on exactly 100.
    index as f64 * 100.0 / total as f64
}

/// Nearest step index to a percentage position, clamped to `[0, total]`.
///
/// Halfway positions round up.
pub fn step_at(pos: f64, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let steps = pos * total as f64 / 100.0;
    if steps.is_nan() || steps <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Truncating a non-negative value after adding 0.5 rounds it; result is clamped"
    )]
    let index = (steps + 0.5) as usize;
    index.min(total)
}
