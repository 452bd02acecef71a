// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlighted process segments and per-step marks.
//!
//! The process is the filled part of the track: from the start to the only
//! handle, or between the outermost handles when there are several.

use alloc::vec::Vec;

use crate::control::Control;
use crate::domain::step_pos;
use crate::error::ErrorSink;
use crate::range::PosRange;
use crate::value::SliderValue;

/// A step mark on the track.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Percentage position of the step.
    pub pos: f64,
    /// Value at the step.
    pub value: SliderValue,
    /// Whether the step lies inside the process.
    pub active: bool,
}

impl<S: ErrorSink> Control<S> {
    /// Filled segments of the track.
    pub fn process(&self) -> Vec<PosRange> {
        let mut it = self.dots_pos().iter().copied();
        let Some(first) = it.next() else {
            return Vec::new();
        };
        if self.len() == 1 {
            return alloc::vec![PosRange::new(0.0, first)];
        }
        let (min, max) = it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        alloc::vec![PosRange::new(min, max)]
    }

    /// Whether `pos` lies inside any process segment.
    pub fn is_active_by_pos(&self, pos: f64) -> bool {
        self.process().iter().any(|r| r.contains(pos))
    }

    /// One mark per step, from `min` (or the first `data` entry) to the end.
    pub fn marks(&self) -> Vec<Mark> {
        let total = self.total();
        let process = self.process();
        let domain = self.config().domain();
        (0..=total)
            .filter_map(|i| {
                let value = domain.value_of_index(i)?;
                let pos = step_pos(i, total);
                Some(Mark {
                    pos,
                    value,
                    active: process.iter().any(|r| r.contains(pos)),
                })
            })
            .collect()
    }
}
