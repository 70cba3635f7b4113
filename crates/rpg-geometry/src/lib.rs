//! Planar geometry primitives for tabletop maps.
//!
//! Everything here lives in continuous pixel space with the screen
//! convention of `y` growing downwards. All types are small `Copy` values
//! with no interior state, so they can be shared freely between threads.

/// Axis-aligned rectangles and their containment/intersection queries.
pub mod aabb;
/// Directed line segments and the orientation test used to cross them.
pub mod line;
/// Points and 2D extents.
pub mod point;

/// Re-export the box type.
pub use aabb::AxisAlignedBox;
/// Re-export segment types and the orientation test.
pub use line::{Line, ccw};
/// Re-export point types.
pub use point::{Dimensions, Point};
