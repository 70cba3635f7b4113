//! Grid orientations and the transforms they select.

use serde::{Deserialize, Serialize};

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which way the hexes of a grid are rotated. Fixed per grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexOrientation {
    /// A corner points straight up; rows of hexes run horizontally.
    #[default]
    PointyTop,
    /// An edge faces straight up; columns of hexes run vertically.
    FlatTop,
}

impl HexOrientation {
    pub(crate) fn layout(self) -> &'static Layout {
        match self {
            Self::PointyTop => &POINTY_TOP,
            Self::FlatTop => &FLAT_TOP,
        }
    }
}

impl std::fmt::Display for HexOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PointyTop => write!(f, "pointy-top"),
            Self::FlatTop => write!(f, "flat-top"),
        }
    }
}

/// Unit-size axial/pixel transform for one orientation.
///
/// `forward` maps `(q, r)` to `(x, y)`, `backward` is its inverse, and
/// `start_angle` is the angle of corner 0 in degrees.
#[derive(Debug)]
pub(crate) struct Layout {
    forward: [f64; 4],
    backward: [f64; 4],
    pub(crate) start_angle: f64,
}

static POINTY_TOP: Layout = Layout {
    forward: [SQRT_3, SQRT_3 / 2.0, 0.0, 1.5],
    backward: [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
    start_angle: 30.0,
};

static FLAT_TOP: Layout = Layout {
    forward: [1.5, 0.0, SQRT_3 / 2.0, SQRT_3],
    backward: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
    start_angle: 0.0,
};

impl Layout {
    pub(crate) fn to_pixel(&self, q: f64, r: f64) -> (f64, f64) {
        let m = &self.forward;
        (m[0] * q + m[1] * r, m[2] * q + m[3] * r)
    }

    pub(crate) fn to_axial(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.backward;
        (m[0] * x + m[1] * y, m[2] * x + m[3] * y)
    }
}
