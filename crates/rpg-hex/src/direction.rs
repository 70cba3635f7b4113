//! The six hex directions.

use serde::{Deserialize, Serialize};

use crate::coord::HexCoord;

/// One of the six directions from a hex to its neighbours.
///
/// Compass names describe a pointy-top layout; on a flat-top grid the same
/// axial offsets point 30° further clockwise. The declaration order is the
/// fixed counter-clockwise order used for neighbour enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    /// Axial `(+1, 0)`.
    #[default]
    East,
    /// Axial `(+1, -1)`.
    NorthEast,
    /// Axial `(0, -1)`.
    NorthWest,
    /// Axial `(-1, 0)`.
    West,
    /// Axial `(-1, +1)`.
    SouthWest,
    /// Axial `(0, +1)`.
    SouthEast,
}

impl HexDirection {
    /// All directions in enumeration order.
    pub const ALL: [HexDirection; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// The axial step for this direction.
    pub const fn offset(self) -> HexCoord {
        match self {
            Self::East => HexCoord::new(1, 0),
            Self::NorthEast => HexCoord::new(1, -1),
            Self::NorthWest => HexCoord::new(0, -1),
            Self::West => HexCoord::new(-1, 0),
            Self::SouthWest => HexCoord::new(-1, 1),
            Self::SouthEast => HexCoord::new(0, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::West => Self::East,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
        }
    }

    /// Position in [`HexDirection::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction whose offset equals `delta`, if it is a unit step.
    pub fn from_offset(delta: HexCoord) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.offset() == delta)
    }
}

impl std::fmt::Display for HexDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::East => write!(f, "east"),
            Self::NorthEast => write!(f, "north-east"),
            Self::NorthWest => write!(f, "north-west"),
            Self::West => write!(f, "west"),
            Self::SouthWest => write!(f, "south-west"),
            Self::SouthEast => write!(f, "south-east"),
        }
    }
}
