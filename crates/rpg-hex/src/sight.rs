//! Sightline primitives for cover checks.
//!
//! A sightline is the straight pixel segment between two hex centres.
//! [`obstruction`] reports how it meets a set of obstacle boxes; turning
//! that report into a cover tier is left to the rules layer.

use rpg_geometry::{AxisAlignedBox, Line};
use serde::{Deserialize, Serialize};

use crate::coord::HexCoord;
use crate::grid::HexGrid;

/// How a sightline meets a set of obstacles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstruction {
    /// Number of obstacles the line touches.
    pub crossed: usize,
    /// The line starts inside at least one obstacle.
    pub origin_inside: bool,
    /// The line ends inside at least one obstacle.
    pub target_inside: bool,
}

impl Obstruction {
    /// Returns `true` if nothing touches the line.
    pub fn is_clear(&self) -> bool {
        self.crossed == 0
    }

    /// Returns `true` if either end sits inside an obstacle.
    pub fn endpoint_inside(&self) -> bool {
        self.origin_inside || self.target_inside
    }
}

/// Test a line against every obstacle.
pub fn obstruction(line: &Line, obstacles: &[AxisAlignedBox]) -> Obstruction {
    obstacles
        .iter()
        .fold(Obstruction::default(), |mut acc, obstacle| {
            if obstacle.intersects(line) {
                acc.crossed += 1;
            }
            acc.origin_inside |= obstacle.contains(line.start);
            acc.target_inside |= obstacle.contains(line.end);
            acc
        })
}

impl HexGrid {
    /// The segment between two hex centres.
    pub fn sightline(&self, from: HexCoord, to: HexCoord) -> Line {
        Line::new(self.axial_to_pixel(from), self.axial_to_pixel(to))
    }

    /// Obstruction of the sightline between two hexes.
    pub fn obstruction_between(
        &self,
        from: HexCoord,
        to: HexCoord,
        obstacles: &[AxisAlignedBox],
    ) -> Obstruction {
        obstruction(&self.sightline(from, to), obstacles)
    }
}

#[cfg(test)]
mod tests {
    use rpg_geometry::Point;

    use super::*;
    use crate::config::HexGridConfig;

    fn grid() -> HexGrid {
        HexGrid::new(HexGridConfig::default().with_size(10.0)).unwrap()
    }

    #[test]
    fn sightline_joins_centres() {
        let g = grid();
        let line = g.sightline(HexCoord::ORIGIN, HexCoord::new(2, 0));
        assert_eq!(line.start, g.axial_to_pixel(HexCoord::ORIGIN));
        assert_eq!(line.end, g.axial_to_pixel(HexCoord::new(2, 0)));
    }

    #[test]
    fn clear_line() {
        let g = grid();
        let pillar = AxisAlignedBox::new(Point::new(5.0, 20.0), Point::new(15.0, 30.0));
        let report = g.obstruction_between(HexCoord::ORIGIN, HexCoord::new(3, 0), &[pillar]);
        assert!(report.is_clear());
        assert!(!report.endpoint_inside());
    }

    #[test]
    fn counts_each_crossed_obstacle() {
        let g = grid();
        // Sightline runs along y = 0 from x = 0 to x ~ 51.96.
        let obstacles = [
            AxisAlignedBox::new(Point::new(10.0, -5.0), Point::new(14.0, 5.0)),
            AxisAlignedBox::new(Point::new(30.0, -5.0), Point::new(34.0, 5.0)),
            AxisAlignedBox::new(Point::new(30.0, 10.0), Point::new(34.0, 20.0)),
        ];
        let report = g.obstruction_between(HexCoord::ORIGIN, HexCoord::new(3, 0), &obstacles);
        assert_eq!(report.crossed, 2);
        assert!(!report.endpoint_inside());
    }

    #[test]
    fn endpoint_inside_obstacle() {
        let g = grid();
        let target = g.axial_to_pixel(HexCoord::new(2, 0));
        let cover = AxisAlignedBox::new(
            Point::new(target.x - 3.0, target.y - 3.0),
            Point::new(target.x + 3.0, target.y + 3.0),
        );
        let report = g.obstruction_between(HexCoord::ORIGIN, HexCoord::new(2, 0), &[cover]);
        assert_eq!(report.crossed, 1);
        assert!(report.target_inside);
        assert!(!report.origin_inside);
        assert!(report.endpoint_inside());
    }

    #[test]
    fn no_obstacles() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert_eq!(obstruction(&line, &[]), Obstruction::default());
    }
}
