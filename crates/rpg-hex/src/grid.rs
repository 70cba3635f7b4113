//! The hex grid: pixel mapping, cell geometry, and movement queries.

use std::collections::HashMap;

use rpg_geometry::{AxisAlignedBox, Dimensions, Point};
use tracing::debug;

use crate::config::{HexGridConfig, PathOptions};
use crate::coord::HexCoord;
use crate::error::{HexResult, PathResult};
use crate::orientation::{HexOrientation, Layout, SQRT_3};
use crate::path::{self, HexPath, Passability};

/// Maps between axial coordinates and pixel space for a fixed size and
/// orientation.
///
/// The orientation's transform is chosen once at construction. A grid holds
/// no mutable state and can be shared between threads freely.
#[derive(Debug, Clone, Copy)]
pub struct HexGrid {
    config: HexGridConfig,
    layout: &'static Layout,
}

impl HexGrid {
    /// Build a grid, rejecting a size that is not a finite positive number.
    pub fn new(config: HexGridConfig) -> HexResult<Self> {
        config.validate()?;
        debug!(size = config.size, orientation = %config.orientation, "hex grid created");
        Ok(Self {
            config,
            layout: config.orientation.layout(),
        })
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> &HexGridConfig {
        &self.config
    }

    /// Hex size.
    pub fn size(&self) -> f64 {
        self.config.size
    }

    /// Grid orientation.
    pub fn orientation(&self) -> HexOrientation {
        self.config.orientation
    }

    /// Pixel position of a hex centre.
    pub fn axial_to_pixel(&self, hex: HexCoord) -> Point {
        let (x, y) = self.layout.to_pixel(f64::from(hex.q), f64::from(hex.r));
        Point::new(x * self.config.size, y * self.config.size)
    }

    /// Fractional axial coordinates of a pixel, before snapping.
    pub fn pixel_to_fractional(&self, p: Point) -> (f64, f64) {
        self.layout.to_axial(p.x / self.config.size, p.y / self.config.size)
    }

    /// The hex containing a pixel.
    ///
    /// Pixels whose hex lies beyond the `i32` lattice saturate to the edge
    /// of the lattice; NaN coordinates give an unspecified cell.
    pub fn pixel_to_axial(&self, p: Point) -> HexCoord {
        let (q, r) = self.pixel_to_fractional(p);
        HexCoord::round(q, r)
    }

    /// Distance from a hex centre to each of its corners.
    pub fn corner_radius(&self) -> f64 {
        self.config.size
    }

    /// Width and height of one cell's bounding box.
    pub fn cell_dimensions(&self) -> Dimensions {
        let across_flats = SQRT_3 * self.config.size;
        let across_corners = 2.0 * self.config.size;
        match self.config.orientation {
            HexOrientation::PointyTop => Dimensions::new(across_flats, across_corners),
            HexOrientation::FlatTop => Dimensions::new(across_corners, across_flats),
        }
    }

    /// The six corners of a hex, counter-clockwise in math orientation
    /// starting from corner 0 (30° for pointy-top, 0° for flat-top).
    pub fn hex_vertices(&self, hex: HexCoord) -> [Point; 6] {
        let center = self.axial_to_pixel(hex);
        let radius = self.corner_radius();
        std::array::from_fn(|i| {
            let angle = (self.layout.start_angle + 60.0 * i as f64).to_radians();
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
    }

    /// Axis-aligned bounding box of a hex.
    pub fn hex_bounds(&self, hex: HexCoord) -> AxisAlignedBox {
        let center = self.axial_to_pixel(hex);
        let dims = self.cell_dimensions();
        let half = Point::new(dims.width / 2.0, dims.height / 2.0);
        AxisAlignedBox::new(center - half, center + half)
    }

    /// Hex distance between two cells.
    pub fn distance(&self, a: HexCoord, b: HexCoord) -> u32 {
        a.distance(b)
    }

    /// Hex distance between the cells containing two pixels.
    pub fn pixel_distance(&self, a: Point, b: Point) -> u32 {
        self.pixel_to_axial(a).distance(self.pixel_to_axial(b))
    }

    /// The six cells adjacent to `hex`.
    pub fn neighbors(&self, hex: HexCoord) -> [HexCoord; 6] {
        hex.neighbors()
    }

    /// Cheapest path between two cells; see [`path::find_path`].
    pub fn find_path<P>(
        &self,
        start: HexCoord,
        goal: HexCoord,
        terrain: &P,
        options: &PathOptions,
    ) -> PathResult<HexPath>
    where
        P: Passability + ?Sized,
    {
        path::find_path(start, goal, terrain, options)
    }

    /// Movement range from a cell; see [`path::reachable`].
    pub fn reachable<P>(
        &self,
        start: HexCoord,
        budget: u32,
        terrain: &P,
        options: &PathOptions,
    ) -> HashMap<HexCoord, u32>
    where
        P: Passability + ?Sized,
    {
        path::reachable(start, budget, terrain, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HexError;

    fn grid(size: f64, orientation: HexOrientation) -> HexGrid {
        HexGrid::new(
            HexGridConfig::default()
                .with_size(size)
                .with_orientation(orientation),
        )
        .unwrap()
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn rejects_bad_size() {
        let err = HexGrid::new(HexGridConfig::default().with_size(0.0)).unwrap_err();
        assert_eq!(err, HexError::InvalidSize(0.0));
        assert!(HexGrid::new(HexGridConfig::default().with_size(-3.0)).is_err());
    }

    #[test]
    fn pointy_top_pixels() {
        let g = grid(10.0, HexOrientation::PointyTop);
        assert!(close(g.axial_to_pixel(HexCoord::ORIGIN), Point::new(0.0, 0.0)));
        assert!(close(
            g.axial_to_pixel(HexCoord::new(1, 0)),
            Point::new(10.0 * SQRT_3, 0.0)
        ));
        assert!(close(
            g.axial_to_pixel(HexCoord::new(0, 1)),
            Point::new(5.0 * SQRT_3, 15.0)
        ));
        assert!(close(
            g.axial_to_pixel(HexCoord::new(-2, 4)),
            Point::new(0.0, 60.0)
        ));
    }

    #[test]
    fn flat_top_pixels() {
        let g = grid(10.0, HexOrientation::FlatTop);
        assert!(close(
            g.axial_to_pixel(HexCoord::new(1, 0)),
            Point::new(15.0, 5.0 * SQRT_3)
        ));
        assert!(close(
            g.axial_to_pixel(HexCoord::new(0, 1)),
            Point::new(0.0, 10.0 * SQRT_3)
        ));
    }

    #[test]
    fn round_trip_both_orientations() {
        for orientation in [HexOrientation::PointyTop, HexOrientation::FlatTop] {
            let g = grid(7.5, orientation);
            for q in -15..=15 {
                for r in -15..=15 {
                    let hex = HexCoord::new(q, r);
                    assert_eq!(g.pixel_to_axial(g.axial_to_pixel(hex)), hex, "{orientation}");
                }
            }
        }
    }

    #[test]
    fn points_near_centre_snap_to_that_hex() {
        let g = grid(20.0, HexOrientation::PointyTop);
        let hex = HexCoord::new(3, -2);
        let c = g.axial_to_pixel(hex);
        for (dx, dy) in [(8.0, 0.0), (-8.0, 3.0), (0.0, -15.0), (12.0, 5.0)] {
            assert_eq!(g.pixel_to_axial(Point::new(c.x + dx, c.y + dy)), hex);
        }
    }

    #[test]
    fn vertices_lie_on_corner_radius() {
        for orientation in [HexOrientation::PointyTop, HexOrientation::FlatTop] {
            let g = grid(12.0, orientation);
            let hex = HexCoord::new(-1, 2);
            let c = g.axial_to_pixel(hex);
            for v in g.hex_vertices(hex) {
                assert!((v.distance_to(c) - 12.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn pointy_top_has_corner_at_bottom_flat_top_at_right() {
        let pointy = grid(10.0, HexOrientation::PointyTop);
        let v = pointy.hex_vertices(HexCoord::ORIGIN);
        assert!(close(v[1], Point::new(0.0, 10.0)));
        assert!(close(v[4], Point::new(0.0, -10.0)));

        let flat = grid(10.0, HexOrientation::FlatTop);
        let v = flat.hex_vertices(HexCoord::ORIGIN);
        assert!(close(v[0], Point::new(10.0, 0.0)));
        assert!(close(v[3], Point::new(-10.0, 0.0)));
    }

    #[test]
    fn neighbours_share_exactly_two_corners() {
        for orientation in [HexOrientation::PointyTop, HexOrientation::FlatTop] {
            let g = grid(10.0, orientation);
            let a = g.hex_vertices(HexCoord::ORIGIN);
            for n in HexCoord::ORIGIN.neighbors() {
                let b = g.hex_vertices(n);
                let shared = a.iter().filter(|p| b.iter().any(|q| close(**p, *q))).count();
                assert_eq!(shared, 2, "{orientation} {n}");
            }
        }
    }

    #[test]
    fn bounds_enclose_vertices() {
        for orientation in [HexOrientation::PointyTop, HexOrientation::FlatTop] {
            let g = grid(9.0, orientation);
            let hex = HexCoord::new(2, 5);
            let bounds = g.hex_bounds(hex);
            let tight = AxisAlignedBox::enclosing(&g.hex_vertices(hex)).unwrap();
            assert!((bounds.min_x() - tight.min_x()).abs() < 1e-9);
            assert!((bounds.max_x() - tight.max_x()).abs() < 1e-9);
            assert!((bounds.min_y() - tight.min_y()).abs() < 1e-9);
            assert!((bounds.max_y() - tight.max_y()).abs() < 1e-9);
        }
    }

    #[test]
    fn pixel_distance_snaps_first() {
        let g = grid(10.0, HexOrientation::FlatTop);
        let a = g.axial_to_pixel(HexCoord::new(0, 0));
        let b = g.axial_to_pixel(HexCoord::new(3, -1));
        assert_eq!(g.pixel_distance(a, b), 3);
        assert_eq!(g.pixel_distance(a, Point::new(a.x + 2.0, a.y - 1.0)), 0);
    }

    #[test]
    fn far_pixels_saturate_to_lattice_edge() {
        let g = grid(1.0, HexOrientation::PointyTop);
        let hex = g.pixel_to_axial(Point::new(1e12, 0.0));
        assert_eq!(hex.q, i32::MAX);
        let hex = g.pixel_to_axial(Point::new(-1e12, 0.0));
        assert_eq!(hex.q, i32::MIN);
    }

    #[test]
    fn reachable_delegates_with_options() {
        let g = grid(10.0, HexOrientation::FlatTop);
        let opts = PathOptions::default().with_max_steps(7);
        let area = g.reachable(HexCoord::ORIGIN, u32::MAX, &crate::path::Open, &opts);
        assert_eq!(area.len(), 7);
    }

    #[test]
    fn nan_input_is_not_validated() {
        let g = grid(10.0, HexOrientation::PointyTop);
        let (q, _) = g.pixel_to_fractional(Point::new(f64::NAN, 0.0));
        assert!(q.is_nan());
    }
}
