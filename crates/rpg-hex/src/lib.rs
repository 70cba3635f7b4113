//! Hex grid geometry for tabletop maps.
//!
//! Converts between axial hex coordinates and pixel space for pointy-top and
//! flat-top grids, measures hex distances, enumerates neighbours, finds
//! paths over the unbounded lattice, and builds sightlines that the cover
//! rules test against obstacle boxes from [`rpg_geometry`].

/// Grid and path-search options.
pub mod config;
/// Axial coordinates, cube rounding, rings and lines.
pub mod coord;
/// The six neighbour directions.
pub mod direction;
/// Error types for grid construction and path search.
pub mod error;
/// Pixel mapping and cell geometry.
pub mod grid;
/// Pointy-top and flat-top orientations.
pub mod orientation;
/// A* path search and movement range.
pub mod path;
/// Sightlines and obstacle reports.
pub mod sight;

/// Re-export configuration types.
pub use config::{HexGridConfig, PathOptions};
/// Re-export the coordinate type.
pub use coord::HexCoord;
/// Re-export the direction type.
pub use direction::HexDirection;
/// Re-export error types.
pub use error::{HexError, HexResult, PathError, PathResult};
/// Re-export the grid.
pub use grid::HexGrid;
/// Re-export the orientation type.
pub use orientation::HexOrientation;
/// Re-export path search types.
pub use path::{HexPath, Open, Passability, TerrainMap, find_path, reachable};
/// Re-export sightline types.
pub use sight::{Obstruction, obstruction};
