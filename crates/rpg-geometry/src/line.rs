//! Directed segments.
//!
//! Crossing uses the classic counter-clockwise orientation test: segments
//! `AB` and `CD` cross iff `C` and `D` are on opposite sides of `AB` and
//! `A` and `B` are on opposite sides of `CD`. The comparison is strict, so
//! exactly collinear overlapping segments are reported as not crossing.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Returns `true` if `a`, `b`, `c` are in strictly counter-clockwise order.
///
/// With `y` growing downwards this reads as clockwise on screen; only the
/// sign matters for crossing tests.
pub fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// A directed segment from `start` to `end`. Zero-length segments are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Where the segment begins.
    pub start: Point,
    /// Where the segment ends.
    pub end: Point,
}

impl Line {
    /// Create a segment between two points.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// The point halfway between `start` and `end`.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Returns `true` if both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// The same segment running the other way.
    pub fn reversed(&self) -> Line {
        Line::new(self.end, self.start)
    }

    /// Proper segment intersection test.
    pub fn crosses(&self, other: &Line) -> bool {
        let (a, b) = (self.start, self.end);
        let (c, d) = (other.start, other.end);
        ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
    }
}
