// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider model: handle positions, their values, and drag updates.
//!
//! ## Usage
//!
//! 1) Build a [`Control`] from a [`SliderConfig`] and the initial value(s).
//! 2) On each drag frame, call [`Control::set_dot_pos`] with the target
//!    percentage for the dragged handle (see [`Control::recent_dot`] to pick
//!    the handle nearest a click).
//! 3) Render from [`Control::dots`].
//!
//! ```
//! use understory_slider::{Control, SliderConfig, SliderValue};
//!
//! let mut slider = Control::new(SliderConfig::default(), [20, 80]);
//! assert_eq!(slider.dots_pos(), &[20.0, 80.0]);
//!
//! let index = slider.recent_dot(75.0).unwrap();
//! assert_eq!(index, 1);
//! assert!(slider.set_dot_pos(90.0, index));
//! assert_eq!(slider.dots()[1].value, SliderValue::from(90));
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::config::SliderConfig;
use crate::domain::{step_at, step_pos};
use crate::error::{ErrorKind, ErrorSink, Silent};
use crate::range::{self, PosRange, ValidPos};
use crate::value::{DotValues, SliderValue};

/// A handle as exposed for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    /// Percentage position along the track.
    pub pos: f64,
    /// Semantic value.
    pub value: SliderValue,
}

/// Position/value state of a multi-handle slider.
///
/// `dots_pos[i]` and `dots_value[i]` always describe the same handle. Derived
/// quantities ([`total`](Self::total), [`gap`](Self::gap),
/// [`value_pos`](Self::value_pos), [`value_pos_range`](Self::value_pos_range))
/// are recomputed on each call and never cached.
pub struct Control<S = Silent> {
    config: SliderConfig,
    sink: S,
    dots_pos: Vec<f64>,
    dots_value: Vec<SliderValue>,
}

impl<S> fmt::Debug for Control<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("config", &self.config)
            .field("dots_pos", &self.dots_pos)
            .field("dots_value", &self.dots_value)
            .finish_non_exhaustive()
    }
}

impl Control<Silent> {
    /// Create a slider whose errors are silently dropped.
    pub fn new(config: SliderConfig, value: impl Into<DotValues>) -> Self {
        Self::with_error_sink(config, value, Silent)
    }
}

impl<S: ErrorSink> Control<S> {
    /// Create a slider reporting errors to `sink`.
    pub fn with_error_sink(config: SliderConfig, value: impl Into<DotValues>, sink: S) -> Self {
        let mut control = Self {
            config,
            sink,
            dots_pos: Vec::new(),
            dots_value: Vec::new(),
        };
        control.set_value(value);
        control
    }

    /// The configuration this slider was built with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current handle positions, in handle order.
    pub fn dots_pos(&self) -> &[f64] {
        &self.dots_pos
    }

    /// Current handle values, in handle order.
    pub fn dots_value(&self) -> &[SliderValue] {
        &self.dots_value
    }

    /// Number of handles.
    pub fn len(&self) -> usize {
        self.dots_pos.len()
    }

    /// Whether there are no handles.
    pub fn is_empty(&self) -> bool {
        self.dots_pos.is_empty()
    }

    fn report(&self, kind: ErrorKind) {
        tracing::debug!(?kind, "slider error");
        self.sink.report(kind, kind.message());
    }

    // -- Value/position conversion ------------------------------------------

    /// Step count of the domain, or [`ErrorKind::Interval`].
    pub fn try_total(&self) -> Result<usize, ErrorKind> {
        self.config.domain().total()
    }

    /// Step count of the domain.
    ///
    /// Reports [`ErrorKind::Interval`] and returns `0` when `max - min` is
    /// not a multiple of `interval`. Reports once per call.
    pub fn total(&self) -> usize {
        self.try_total().unwrap_or_else(|kind| {
            self.report(kind);
            0
        })
    }

    /// Percentage distance between adjacent steps (`0` for a degenerate domain).
    pub fn gap(&self) -> f64 {
        step_pos(1, self.total())
    }

    /// Position of every step: `[0, gap, 2 * gap, ..., 100]`, `total + 1` entries.
    pub fn value_pos(&self) -> Vec<f64> {
        let total = self.total();
        (0..=total).map(|i| step_pos(i, total)).collect()
    }

    /// Position of `value`, or why it has none. Nothing is reported.
    ///
    /// Bounds and membership are checked before the step count, so a value
    /// below `min` is [`ErrorKind::Min`] even when the interval is invalid.
    pub fn try_parse_value(&self, value: &SliderValue) -> Result<f64, ErrorKind> {
        let domain = self.config.domain();
        let index = domain.index_of_value(value)?;
        let total = domain.total()?;
        pos_of_index(index, total)
    }

    /// Position of `value`.
    ///
    /// Values below `min`, above `max`, absent from `data`, or otherwise
    /// unresolvable are reported and resolve to position `0`. Once the value
    /// itself resolves, the step count is read (reporting
    /// [`ErrorKind::Interval`] if it is invalid).
    pub fn parse_value(&self, value: &SliderValue) -> f64 {
        self.config
            .domain()
            .index_of_value(value)
            .and_then(|index| pos_of_index(index, self.total()))
            .unwrap_or_else(|kind| {
                self.report(kind);
                0.0
            })
    }

    /// Value at position `pos`, snapped to the nearest step.
    ///
    /// Returns `None` only for an empty `data` domain (or decimal overflow).
    pub fn parse_pos(&self, pos: f64) -> Option<SliderValue> {
        let total = self.total();
        self.config.domain().value_of_index(step_at(pos, total))
    }

    /// Step index of `value`, or why it has none.
    pub fn index_of_value(&self, value: &SliderValue) -> Result<usize, ErrorKind> {
        self.config.domain().index_of_value(value)
    }

    /// Value at step `index`, clamped to `[0, total]`.
    pub fn value_of_index(&self, index: usize) -> Option<SliderValue> {
        let index = index.min(self.total());
        self.config.domain().value_of_index(index)
    }

    // -- Handle ranges ------------------------------------------------------

    /// Minimum percentage distance between adjacent handles (`0` if unset).
    pub fn min_range_dir(&self) -> f64 {
        match self.config.effective_min_range() {
            Some(steps) => steps as f64 * self.gap(),
            None => 0.0,
        }
    }

    /// Maximum percentage distance between adjacent handles (`100` if unset).
    ///
    /// Informational only: handle ranges do not consult it.
    pub fn max_range_dir(&self) -> f64 {
        match self.config.effective_max_range() {
            Some(steps) => steps as f64 * self.gap(),
            None => 100.0,
        }
    }

    fn min_range_bound(&self) -> Option<f64> {
        self.config
            .effective_min_range()
            .map(|_| self.min_range_dir())
    }

    fn range_of(&self, index: usize, min_range_dir: Option<f64>) -> PosRange {
        range::resolve(
            &self.dots_pos,
            index,
            min_range_dir,
            self.config.enable_cross(),
        )
    }

    /// The movement bounds of every handle, given the current positions.
    pub fn value_pos_range(&self) -> Vec<PosRange> {
        let dir = self.min_range_bound();
        (0..self.dots_pos.len())
            .map(|i| self.range_of(i, dir))
            .collect()
    }

    /// Clamp `pos` into handle `index`'s current bounds.
    ///
    /// An out-of-bounds `index` has the whole track available.
    pub fn valid_pos(&self, pos: f64, index: usize) -> ValidPos {
        self.range_of(index, self.min_range_bound()).clamp(pos)
    }

    // -- Mutation -----------------------------------------------------------

    /// Replace every handle value, then move the handles to match.
    ///
    /// Accepts a single value (one handle) or a list. Order is kept as given.
    pub fn set_value(&mut self, value: impl Into<DotValues>) {
        self.set_dots_value(value.into().into_vec(), true);
    }

    /// Replace every handle value, optionally resyncing positions.
    ///
    /// Without a resync the positions are left as they are, so callers should
    /// follow up with [`sync_dots_pos`](Self::sync_dots_pos) or
    /// [`set_dots_pos`](Self::set_dots_pos) before the handle counts diverge.
    pub fn set_dots_value(&mut self, values: Vec<SliderValue>, sync_pos: bool) {
        self.dots_value = values;
        if sync_pos {
            self.sync_dots_pos();
        }
    }

    /// Recompute every position from the current values.
    pub fn sync_dots_pos(&mut self) {
        let positions = self
            .dots_value
            .iter()
            .map(|v| self.parse_value(v))
            .collect();
        self.dots_pos = positions;
    }

    /// Set every handle position and derive the values.
    ///
    /// Positions are stored exactly as given, but values are assigned from
    /// the positions in ascending order: `dots_value[k]` is the value at the
    /// `k`-th smallest position, not necessarily at `dots_pos[k]`.
    pub fn set_dots_pos(&mut self, dots_pos: Vec<f64>) {
        self.apply_dots_pos(dots_pos);
    }

    fn apply_dots_pos(&mut self, dots_pos: Vec<f64>) -> bool {
        let mut sorted = dots_pos.clone();
        sorted.sort_by(f64::total_cmp);
        let values: Option<Vec<_>> = sorted.iter().map(|&pos| self.parse_pos(pos)).collect();
        match values {
            Some(values) => {
                self.dots_pos = dots_pos;
                self.dots_value = values;
                true
            }
            None => {
                self.report(ErrorKind::Value);
                false
            }
        }
    }

    /// Sort positions ascending. Values are left as they are.
    pub fn sort_dots_pos(&mut self) {
        self.dots_pos.sort_by(f64::total_cmp);
    }

    /// Handles zipped with their values, by index.
    pub fn dots(&self) -> Vec<Dot> {
        self.dots_pos
            .iter()
            .zip(&self.dots_value)
            .map(|(&pos, value)| Dot {
                pos,
                value: value.clone(),
            })
            .collect()
    }

    /// Drag handle `index` toward `pos`.
    ///
    /// The target is clamped into the handle's bounds. In fixed mode every
    /// handle moves by the same delta, shrunk until all of them stay in
    /// bounds; otherwise only `index` moves.
    ///
    /// Returns `false` and leaves the state unchanged if nothing moves.
    pub fn set_dot_pos(&mut self, pos: f64, index: usize) -> bool {
        let Some(&current) = self.dots_pos.get(index) else {
            tracing::trace!(index, len = self.dots_pos.len(), "no such handle");
            return false;
        };
        let change = self.valid_pos(pos, index).pos - current;
        if !change.is_finite() || change == 0.0 {
            return false;
        }

        let next: Vec<f64> = if self.config.fixed() {
            let change = self.fixed_change(change, index);
            if change == 0.0 {
                tracing::trace!(index, "fixed drag blocked");
                return false;
            }
            self.dots_pos.iter().map(|p| p + change).collect()
        } else {
            let mut next = self.dots_pos.clone();
            next[index] += change;
            next
        };
        self.apply_dots_pos(next)
    }

    /// Shrink `change` until every other handle stays within its bounds.
    fn fixed_change(&self, mut change: f64, index: usize) -> f64 {
        let dir = self.min_range_bound();
        let sign = if change < 0.0 { -1.0 } else { 1.0 };
        for (i, &origin) in self.dots_pos.iter().enumerate() {
            if i == index {
                continue;
            }
            let ValidPos { pos, in_range } = self.range_of(i, dir).clamp(origin + change);
            if !in_range {
                change = abs(pos - origin).min(abs(change)) * sign;
            }
        }
        change
    }

    /// Index of the handle nearest to `pos`; the first on ties.
    ///
    /// `None` when there are no handles.
    pub fn recent_dot(&self, pos: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.dots_pos.iter().enumerate() {
            let distance = abs(p - pos);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((i, distance));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Position of step `index`, which must exist in a domain of `total` steps.
fn pos_of_index(index: usize, total: usize) -> Result<f64, ErrorKind> {
    if index > total {
        return Err(ErrorKind::Value);
    }
    Ok(step_pos(index, total))
}

fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderFlags;
    use crate::value::Symbol;
    use alloc::vec;
    use core::cell::RefCell;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn tens(flags: SliderFlags) -> SliderConfig {
        SliderConfig {
            interval: dec!(10),
            flags,
            ..Default::default()
        }
    }

    fn n(v: i32) -> SliderValue {
        v.into()
    }

    fn approx(a: f64, b: f64) -> bool {
        abs(a - b) < 1e-9
    }

    #[test]
    fn value_pos_table_shape() {
        let c = Control::new(tens(SliderFlags::empty()), 0);
        let table = c.value_pos();
        assert_eq!(table.len(), c.total() + 1);
        assert_eq!(table[0], 0.0);
        assert_eq!(table[10], 100.0);
        assert!(table.windows(2).all(|w| w[0] < w[1]));
        assert!(approx(c.gap(), 10.0));
    }

    #[test]
    fn parse_value_and_pos_round_trip() {
        let c = Control::new(
            SliderConfig {
                min: dec!(0),
                max: dec!(1),
                interval: dec!(0.1),
                ..Default::default()
            },
            0,
        );
        for i in 0..=10 {
            let v = SliderValue::from(Decimal::new(i, 1));
            assert_eq!(c.parse_pos(c.parse_value(&v)), Some(v));
        }
    }

    #[test]
    fn data_domain_initial_value() {
        let c = Control::new(
            SliderConfig {
                data: Some(vec!["a".into(), "b".into(), "c".into()]),
                ..Default::default()
            },
            "b",
        );
        assert_eq!(c.dots_pos(), &[50.0]);
        assert_eq!(
            c.dots(),
            vec![Dot {
                pos: 50.0,
                value: "b".into()
            }]
        );
    }

    #[test]
    fn symbols_in_data_domain() {
        let data = vec![Symbol("lo").into(), Symbol("hi").into()];
        let c = Control::new(
            SliderConfig {
                data: Some(data),
                ..Default::default()
            },
            Symbol("hi"),
        );
        assert_eq!(c.dots_pos(), &[100.0]);
        assert_eq!(c.parse_pos(10.0), Some(Symbol("lo").into()));
    }

    #[test]
    fn out_of_bounds_values_report_and_fall_back() {
        let errors = RefCell::new(Vec::new());
        let c = Control::with_error_sink(
            SliderConfig::default(),
            [-5, 200],
            |kind: ErrorKind, _: &str| errors.borrow_mut().push(kind),
        );
        assert_eq!(c.dots_pos(), &[0.0, 0.0]);
        assert_eq!(*errors.borrow(), vec![ErrorKind::Min, ErrorKind::Max]);

        errors.borrow_mut().clear();
        assert_eq!(c.parse_value(&Symbol("x").into()), 0.0);
        assert_eq!(c.parse_value(&"nope".into()), 0.0);
        assert_eq!(*errors.borrow(), vec![ErrorKind::Value, ErrorKind::Value]);
    }

    #[test]
    fn missing_data_value_is_a_value_error() {
        let c = Control::new(
            SliderConfig {
                data: Some(vec!["a".into(), "b".into()]),
                ..Default::default()
            },
            "a",
        );
        assert_eq!(c.try_parse_value(&"q".into()), Err(ErrorKind::Value));
    }

    #[test]
    fn bad_interval_reports_once_per_total() {
        let errors = RefCell::new(Vec::new());
        let c = Control::with_error_sink(
            SliderConfig {
                max: dec!(10),
                interval: dec!(3),
                ..Default::default()
            },
            DotValues::default(),
            |kind: ErrorKind, _: &str| errors.borrow_mut().push(kind),
        );
        // No handles, so construction never read the step count.
        assert!(errors.borrow().is_empty());
        assert_eq!(c.total(), 0);
        assert_eq!(*errors.borrow(), vec![ErrorKind::Interval]);
        assert_eq!(c.total(), 0);
        assert_eq!(errors.borrow().len(), 2);
        assert_eq!(c.gap(), 0.0);
        assert_eq!(c.value_pos(), vec![0.0]);
        assert_eq!(errors.borrow().len(), 4);
    }

    #[test]
    fn bad_interval_reports_per_handle_after_bounds() {
        let errors = RefCell::new(Vec::new());
        let mut c = Control::with_error_sink(
            SliderConfig {
                max: dec!(10),
                interval: dec!(3),
                ..Default::default()
            },
            [0, 0],
            |kind: ErrorKind, _: &str| errors.borrow_mut().push(kind),
        );
        // Each handle reads the step count once.
        assert_eq!(*errors.borrow(), vec![ErrorKind::Interval; 2]);
        assert_eq!(c.dots_pos(), &[0.0, 0.0]);

        // Bounds are checked before the step count is read.
        errors.borrow_mut().clear();
        assert_eq!(c.parse_value(&(-1).into()), 0.0);
        assert_eq!(*errors.borrow(), vec![ErrorKind::Min]);

        // `try_*` returns the first failure without reporting.
        errors.borrow_mut().clear();
        assert_eq!(c.try_parse_value(&(-1).into()), Err(ErrorKind::Min));
        assert_eq!(c.try_parse_value(&0.into()), Err(ErrorKind::Interval));
        assert!(errors.borrow().is_empty());

        // Deriving values from positions also reads it per handle.
        c.set_dots_pos(vec![0.0, 50.0]);
        assert_eq!(*errors.borrow(), vec![ErrorKind::Interval; 2]);
        assert_eq!(c.dots_value(), &[n(0), n(0)]);
    }

    #[test]
    fn blocked_by_neighbor_without_cross() {
        let mut c = Control::new(tens(SliderFlags::empty()), [20, 80]);
        let target = c.parse_value(&90.into());
        let range = c.value_pos_range();
        assert_eq!(range[0], PosRange::new(0.0, c.dots_pos()[1]));

        let valid = c.valid_pos(target, 0);
        assert!(!valid.in_range);
        assert_eq!(valid.pos, 80.0);

        assert!(c.set_dot_pos(target, 0));
        assert_eq!(c.dots_pos(), &[80.0, 80.0]);
        assert_eq!(c.dots_value(), &[n(80), n(80)]);
    }

    #[test]
    fn no_op_drag_returns_false() {
        let mut c = Control::new(tens(SliderFlags::empty()), [20, 80]);
        assert!(!c.set_dot_pos(20.0, 0));
        assert!(c.set_dot_pos(100.0, 1));
        // Already on its bound.
        assert!(!c.set_dot_pos(120.0, 1));
        assert_eq!(c.dots_pos(), &[20.0, 100.0]);
        assert_eq!(c.dots_value(), &[n(20), n(100)]);
        assert!(!c.set_dot_pos(50.0, 7));
        assert!(!c.set_dot_pos(f64::NAN, 0));
    }

    #[test]
    fn crossing_reorders_values_but_not_positions() {
        let mut c = Control::new(tens(SliderFlags::ENABLE_CROSS), [20, 80]);
        assert!(c.set_dot_pos(90.0, 0));
        // Positions stay in handle order, values follow ascending position.
        assert_eq!(c.dots_pos(), &[90.0, 80.0]);
        assert_eq!(c.dots_value(), &[n(80), n(90)]);

        c.sort_dots_pos();
        assert_eq!(c.dots_pos(), &[80.0, 90.0]);
        assert_eq!(c.dots_value(), &[n(80), n(90)]);
    }

    #[test]
    fn set_dots_pos_assigns_values_in_sorted_order() {
        let mut c = Control::new(SliderConfig::default(), [0, 0, 0]);
        c.set_dots_pos(vec![70.0, 10.0, 40.0]);
        assert_eq!(c.dots_pos(), &[70.0, 10.0, 40.0]);
        assert_eq!(c.dots_value(), &[n(10), n(40), n(70)]);
        let dots = c.dots();
        assert_eq!(dots[0].pos, 70.0);
        assert_eq!(dots[0].value, n(10));
    }

    #[test]
    fn sync_restores_pairing() {
        let mut c = Control::new(SliderConfig::default(), [30, 60]);
        c.set_dots_value(vec![10.into(), 90.into()], false);
        assert_eq!(c.dots_pos(), &[30.0, 60.0]);
        c.sync_dots_pos();
        assert_eq!(c.dots_pos(), &[10.0, 90.0]);
    }

    #[test]
    fn fixed_mode_moves_all_handles() {
        let config = SliderConfig::default().with_flags(SliderFlags::FIXED);
        let mut c = Control::new(config, [20, 60]);
        assert!(c.set_dot_pos(30.0, 0));
        assert_eq!(c.dots_pos(), &[30.0, 70.0]);
        assert_eq!(c.dots_value(), &[n(30), n(70)]);
    }

    #[test]
    fn fixed_mode_shrinks_delta_to_fit() {
        let flags = SliderFlags::FIXED | SliderFlags::ENABLE_CROSS;
        let mut c = Control::new(SliderConfig::default().with_flags(flags), [20, 60]);
        assert!(c.set_dot_pos(70.0, 0));
        assert_eq!(c.dots_pos(), &[60.0, 100.0]);
        // Fully blocked: handle 1 already sits at 100.
        assert!(!c.set_dot_pos(80.0, 0));
        assert_eq!(c.dots_pos(), &[60.0, 100.0]);
        // Moving back is unconstrained.
        assert!(c.set_dot_pos(0.0, 0));
        assert_eq!(c.dots_pos(), &[0.0, 40.0]);
    }

    #[test]
    fn min_range_keeps_spacing_room() {
        let mut c = Control::new(
            SliderConfig {
                interval: dec!(10),
                min_range: Some(2),
                ..Default::default()
            },
            [50, 60],
        );
        assert!(approx(c.min_range_dir(), 20.0));
        assert_eq!(c.max_range_dir(), 100.0);
        let ranges = c.value_pos_range();
        assert!(approx(ranges[0].max, 80.0));
        assert!(approx(ranges[1].min, 20.0));
        assert!(c.set_dot_pos(100.0, 0));
        assert!(approx(c.dots_pos()[0], 80.0));
    }

    #[test]
    fn max_range_is_not_enforced() {
        let mut c = Control::new(
            SliderConfig {
                interval: dec!(10),
                max_range: Some(1),
                ..Default::default()
            },
            [0, 10],
        );
        assert!(approx(c.max_range_dir(), 10.0));
        assert!(c.set_dot_pos(100.0, 1));
        assert_eq!(c.dots_value(), &[n(0), n(100)]);
    }

    #[test]
    fn recent_dot_prefers_first_on_tie() {
        let c = Control::new(SliderConfig::default(), [20, 40, 80]);
        assert_eq!(c.recent_dot(30.0), Some(0));
        assert_eq!(c.recent_dot(35.0), Some(1));
        assert_eq!(c.recent_dot(95.0), Some(2));
        let empty = Control::new(SliderConfig::default(), DotValues::default());
        assert_eq!(empty.recent_dot(50.0), None);
    }

    #[test]
    fn value_of_index_clamps() {
        let c = Control::new(tens(SliderFlags::empty()), 0);
        assert_eq!(c.value_of_index(3), Some(30.into()));
        assert_eq!(c.value_of_index(99), Some(100.into()));
        assert_eq!(c.index_of_value(&40.into()), Ok(4));
    }

    #[test]
    fn empty_data_leaves_state_untouched() {
        let errors = RefCell::new(Vec::new());
        let mut c = Control::with_error_sink(
            SliderConfig {
                data: Some(Vec::new()),
                ..Default::default()
            },
            DotValues::default(),
            |kind: ErrorKind, _: &str| errors.borrow_mut().push(kind),
        );
        c.set_dots_pos(vec![10.0]);
        assert!(c.is_empty());
        assert_eq!(*errors.borrow(), vec![ErrorKind::Value]);
    }
}
