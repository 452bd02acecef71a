// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between a track segment in layout space and percentage positions.
//!
//! The slider model only knows percentages. A host that lays the track out as
//! a straight segment (horizontal, vertical, reversed, or tilted) uses
//! [`Track`] to turn pointer locations and deltas into percentages and handle
//! positions back into points.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_slider::Track;
//!
//! // A 200px horizontal track starting at x = 50.
//! let track = Track::new(Point::new(50.0, 10.0), Point::new(250.0, 10.0));
//! assert_eq!(track.pos_at(Point::new(150.0, 30.0)), 50.0);
//! assert_eq!(track.pos_delta(Vec2::new(20.0, 5.0)), 10.0);
//! assert_eq!(track.point_at(25.0), Point::new(100.0, 10.0));
//! ```

use kurbo::{Line, Point, Vec2};

/// A straight slider track from the `0%` end to the `100%` end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Track {
    line: Line,
}

impl Track {
    /// Create a track from its `0%` and `100%` endpoints.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            line: Line::new(start, end),
        }
    }

    fn axis(&self) -> Vec2 {
        self.line.p1 - self.line.p0
    }

    /// Percentage position of the projection of `point` onto the track.
    ///
    /// Not clamped; the slider clamps per handle. A zero-length track maps
    /// everything to `0`.
    pub fn pos_at(&self, point: Point) -> f64 {
        self.pos_delta(point - self.line.p0)
    }

    /// Percentage change corresponding to a pointer movement of `delta`.
    pub fn pos_delta(&self, delta: Vec2) -> f64 {
        let axis = self.axis();
        let len2 = axis.hypot2();
        if len2 == 0.0 {
            return 0.0;
        }
        delta.dot(axis) * 100.0 / len2
    }

    /// Point on the track at percentage `pos`.
    pub fn point_at(&self, pos: f64) -> Point {
        self.line.p0 + self.axis() * (pos / 100.0)
    }
}
