// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-handle movement bounds in percentage space.

/// Inclusive `[min, max]` bounds in percentage space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PosRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl PosRange {
    /// The whole track, `[0, 100]`.
    pub const FULL: Self = Self::new(0.0, 100.0);

    /// Create a range from its bounds.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `pos` lies within the bounds (inclusive).
    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.min && pos <= self.max
    }

    /// Clamp `pos` into the bounds.
    pub fn clamp(&self, pos: f64) -> ValidPos {
        if pos < self.min {
            ValidPos {
                pos: self.min,
                in_range: false,
            }
        } else if pos > self.max {
            ValidPos {
                pos: self.max,
                in_range: false,
            }
        } else {
            ValidPos {
                pos,
                in_range: true,
            }
        }
    }
}

/// A position after clamping into a handle's range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValidPos {
    /// The clamped position.
    pub pos: f64,
    /// `false` if clamping moved the position.
    pub in_range: bool,
}

/// Bounds for handle `index` given every handle's current position.
///
/// - With a minimum spacing (`min_range_dir`, in percent), handle `i` keeps
///   room for the `i` handles before it and the ones after it.
/// - Otherwise, without crossing, the neighbors' positions bound it.
/// - Otherwise the whole track is available.
pub fn resolve(
    dots_pos: &[f64],
    index: usize,
    min_range_dir: Option<f64>,
    enable_cross: bool,
) -> PosRange {
    if let Some(dir) = min_range_dir {
        let after = dots_pos.len().saturating_sub(index + 1);
        return PosRange::new(dir * index as f64, 100.0 - dir * after as f64);
    }
    if !enable_cross {
        let min = index
            .checked_sub(1)
            .and_then(|prev| dots_pos.get(prev))
            .copied()
            .unwrap_or(0.0);
        let max = dots_pos.get(index + 1).copied().unwrap_or(100.0);
        return PosRange::new(min, max);
    }
    PosRange::FULL
}
