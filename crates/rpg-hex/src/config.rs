//! Construction-time options for a hex grid and for path search.

use serde::{Deserialize, Serialize};

use crate::error::{HexError, HexResult};
use crate::orientation::HexOrientation;

/// How a [`HexGrid`](crate::HexGrid) is sized and rotated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexGridConfig {
    /// Corner radius of a hex: the distance from its centre to each corner.
    /// Neighbouring centres, and so the flat-to-flat width, are `√3·size`
    /// apart. Must be a finite number `> 0`.
    pub size: f64,
    /// Grid orientation.
    #[serde(default)]
    pub orientation: HexOrientation,
}

impl Default for HexGridConfig {
    fn default() -> Self {
        Self {
            size: 1.0,
            orientation: HexOrientation::PointyTop,
        }
    }
}

impl HexGridConfig {
    /// Set the hex size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the grid orientation.
    pub fn with_orientation(mut self, orientation: HexOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Reject sizes that would produce degenerate geometry.
    pub fn validate(&self) -> HexResult<()> {
        if self.size.is_finite() && self.size > 0.0 {
            Ok(())
        } else {
            Err(HexError::InvalidSize(self.size))
        }
    }
}

/// Limits for a single path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    /// Maximum number of hexes expanded before giving up.
    pub max_steps: usize,
    /// Hexes farther than this from the start are never explored.
    #[serde(default)]
    pub max_radius: Option<u32>,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            max_radius: None,
        }
    }
}

impl PathOptions {
    /// Set the expansion budget.
    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = steps;
        self
    }

    /// Restrict exploration to a radius around the start.
    pub fn with_max_radius(mut self, radius: u32) -> Self {
        self.max_radius = Some(radius);
        self
    }
}
