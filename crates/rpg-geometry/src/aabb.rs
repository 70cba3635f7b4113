//! Axis-aligned rectangles.
//!
//! A box is defined by two arbitrary corners. Every derived bound is taken
//! from the `min`/`max` of those corners, so `Box(a, b)` and `Box(b, a)`
//! answer every query identically.

use serde::{Deserialize, Serialize};

use crate::line::Line;
use crate::point::{Dimensions, Point};

/// A closed axis-aligned rectangle spanned by two corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    /// One defining corner (not necessarily the top-left).
    pub start: Point,
    /// The opposite defining corner.
    pub end: Point,
}

impl AxisAlignedBox {
    /// Create a box from two opposite corners in any order.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a box from its top-left corner and its extent.
    pub fn from_origin(origin: Point, size: Dimensions) -> Self {
        Self::new(
            origin,
            Point::new(origin.x + size.width, origin.y + size.height),
        )
    }

    /// Smallest bounding box around a set of points, or `None` if empty.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::new(min, max))
    }

    /// Leftmost x.
    pub fn min_x(&self) -> f64 {
        self.start.x.min(self.end.x)
    }

    /// Rightmost x.
    pub fn max_x(&self) -> f64 {
        self.start.x.max(self.end.x)
    }

    /// Topmost y.
    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    /// Bottommost y.
    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    /// Width and height of the box.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.max_x() - self.min_x(), self.max_y() - self.min_y())
    }

    /// Centre of the box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x() + self.max_x()) / 2.0,
            (self.min_y() + self.max_y()) / 2.0,
        )
    }

    /// Top edge, running left to right.
    pub fn top(&self) -> Line {
        Line::new(
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
        )
    }

    /// Right edge, running top to bottom.
    pub fn right(&self) -> Line {
        Line::new(
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
        )
    }

    /// Bottom edge, running right to left.
    pub fn bottom(&self) -> Line {
        Line::new(
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        )
    }

    /// Left edge, running bottom to top.
    pub fn left(&self) -> Line {
        Line::new(
            Point::new(self.min_x(), self.max_y()),
            Point::new(self.min_x(), self.min_y()),
        )
    }

    /// The four edges clockwise from the top: `[top, right, bottom, left]`.
    pub fn edges(&self) -> [Line; 4] {
        [self.top(), self.right(), self.bottom(), self.left()]
    }

    /// Returns `true` if the point lies inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        self.min_x() <= p.x && p.x <= self.max_x() && self.min_y() <= p.y && p.y <= self.max_y()
    }

    /// Returns `true` if the segment touches the box.
    ///
    /// Either endpoint being inside is enough. Otherwise the segment has to
    /// properly cross one of the four edges; see [`Line::crosses`] for how
    /// collinear contact is treated.
    pub fn intersects(&self, line: &Line) -> bool {
        if self.contains(line.start) || self.contains(line.end) {
            return true;
        }
        self.edges().iter().any(|edge| line.crosses(edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> AxisAlignedBox {
        AxisAlignedBox::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
    }

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn bounds_from_unordered_corners() {
        let b = AxisAlignedBox::new(Point::new(8.0, -2.0), Point::new(-4.0, 6.0));
        assert!((b.min_x() + 4.0).abs() < f64::EPSILON);
        assert!((b.max_x() - 8.0).abs() < f64::EPSILON);
        assert!((b.min_y() + 2.0).abs() < f64::EPSILON);
        assert!((b.max_y() - 6.0).abs() < f64::EPSILON);
        assert_eq!(b.dimensions(), Dimensions::new(12.0, 8.0));
        assert_eq!(b.center(), Point::new(2.0, 2.0));
    }

    #[test]
    fn edges_run_clockwise_from_top() {
        let [top, right, bottom, left] = unit_box().edges();
        assert_eq!(top, line(0.0, 0.0, 10.0, 0.0));
        assert_eq!(right, line(10.0, 0.0, 10.0, 10.0));
        assert_eq!(bottom, line(10.0, 10.0, 0.0, 10.0));
        assert_eq!(left, line(0.0, 10.0, 0.0, 0.0));
        // Each edge ends where the next begins.
        assert_eq!(top.end, right.start);
        assert_eq!(right.end, bottom.start);
        assert_eq!(bottom.end, left.start);
        assert_eq!(left.end, top.start);
    }

    #[test]
    fn contains_is_closed() {
        let b = unit_box();
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(5.0, 10.0)));
        assert!(!b.contains(Point::new(10.0001, 5.0)));
        assert!(!b.contains(Point::new(5.0, -0.0001)));
    }

    #[test]
    fn reversed_corners_behave_identically() {
        let a = unit_box();
        let b = AxisAlignedBox::new(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        assert_eq!(a.edges(), b.edges());
        for p in [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0001, 5.0),
            Point::new(3.0, 7.0),
        ] {
            assert_eq!(a.contains(p), b.contains(p));
        }
        let l = line(-5.0, 5.0, 15.0, 5.0);
        assert_eq!(a.intersects(&l), b.intersects(&l));
    }

    #[test]
    fn intersects_with_endpoint_inside() {
        assert!(unit_box().intersects(&line(5.0, 5.0, 20.0, 20.0)));
    }

    #[test]
    fn intersects_when_crossing_without_endpoint_inside() {
        assert!(unit_box().intersects(&line(-5.0, 5.0, 15.0, 5.0)));
        assert!(unit_box().intersects(&line(5.0, -5.0, 5.0, 15.0)));
        assert!(unit_box().intersects(&line(-5.0, 6.0, 6.0, -5.0)));
    }

    #[test]
    fn misses() {
        assert!(!unit_box().intersects(&line(-5.0, -5.0, -1.0, -1.0)));
        assert!(!unit_box().intersects(&line(-5.0, 20.0, 20.0, 12.0)));
    }

    #[test]
    fn degenerate_segment_inside_and_outside() {
        assert!(unit_box().intersects(&line(2.0, 2.0, 2.0, 2.0)));
        assert!(!unit_box().intersects(&line(12.0, 2.0, 12.0, 2.0)));
    }

    #[test]
    fn from_origin_and_enclosing() {
        let b = AxisAlignedBox::from_origin(Point::new(1.0, 2.0), Dimensions::new(3.0, 4.0));
        assert_eq!(b.end, Point::new(4.0, 6.0));

        let e = AxisAlignedBox::enclosing(&[
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(e.start, Point::new(-2.0, -1.0));
        assert_eq!(e.end, Point::new(3.0, 4.0));
        assert!(AxisAlignedBox::enclosing(&[]).is_none());
    }
}
