//! Axial hex coordinates.
//!
//! A cell is addressed by `(q, r)`; the implied third cube component is
//! `s = -q - r`. Distances and rounding work in cube space where the
//! constraint `x + y + z = 0` makes them symmetric.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::direction::HexDirection;

/// Axial coordinate of a hex cell. Two coordinates name the same cell iff
/// both components match.
///
/// Ordering is lexicographic on `(q, r)`; path search relies on it for
/// deterministic tie-breaking.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct HexCoord {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
}

impl HexCoord {
    /// The cell at `(0, 0)`.
    pub const ORIGIN: HexCoord = HexCoord::new(0, 0);

    /// Create a coordinate from its axial components.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implied third cube component.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Cube form `[x, y, z]` with `x = q`, `z = r`, `y = -x - z`.
    pub const fn to_cube(self) -> [i32; 3] {
        [self.q, self.s(), self.r]
    }

    /// Snap fractional axial coordinates to the nearest cell.
    pub fn round(q: f64, r: f64) -> Self {
        let [x, _, z] = cube_round(q, -q - r, r);
        Self::new(x, z)
    }

    /// Number of single steps between two cells.
    ///
    /// Computed in `i64`, so any pair of cells is valid input. Distances
    /// above `u32::MAX` saturate.
    pub fn distance(self, other: HexCoord) -> u32 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = -dq - dr;
        let steps = dq.unsigned_abs().max(dr.unsigned_abs()).max(ds.unsigned_abs());
        u32::try_from(steps).unwrap_or(u32::MAX)
    }

    /// The adjacent cell in the given direction.
    pub fn neighbor(self, direction: HexDirection) -> HexCoord {
        self + direction.offset()
    }

    /// The six adjacent cells, in [`HexDirection::ALL`] order.
    pub fn neighbors(self) -> [HexCoord; 6] {
        HexDirection::ALL.map(|d| self.neighbor(d))
    }

    /// All cells exactly `radius` steps away, walking counter-clockwise
    /// from the south-west corner. A radius of zero yields only `self`.
    ///
    /// Cells that fall outside the `i32` lattice are skipped.
    pub fn ring(self, radius: u32) -> Vec<HexCoord> {
        if radius == 0 {
            return vec![self];
        }
        let steps = i64::from(radius);
        let ring_len = 6usize.checked_mul(radius as usize).unwrap_or(usize::MAX);
        let mut results = Vec::with_capacity(ring_len.min(MAX_CAPACITY_HINT));
        let start = HexDirection::SouthWest.offset();
        let (mut q, mut r) = (
            i64::from(self.q) + i64::from(start.q) * steps,
            i64::from(self.r) + i64::from(start.r) * steps,
        );
        for direction in HexDirection::ALL {
            let step = direction.offset();
            for _ in 0..steps {
                results.extend(HexCoord::from_wide(q, r));
                q += i64::from(step.q);
                r += i64::from(step.r);
            }
        }
        results
    }

    /// All cells within `radius` steps (inclusive), ordered by `q` then `r`.
    ///
    /// Cells that fall outside the `i32` lattice are skipped.
    pub fn within(self, radius: u32) -> Vec<HexCoord> {
        let n = i64::from(radius);
        let mut results = Vec::with_capacity(area_capacity(radius));
        for dq in -n..=n {
            for dr in (-n).max(-dq - n)..=n.min(-dq + n) {
                results.extend(HexCoord::from_wide(
                    i64::from(self.q) + dq,
                    i64::from(self.r) + dr,
                ));
            }
        }
        results
    }

    fn from_wide(q: i64, r: i64) -> Option<HexCoord> {
        Some(HexCoord::new(i32::try_from(q).ok()?, i32::try_from(r).ok()?))
    }

    /// Cells on the straight line from `self` to `other`, both inclusive.
    pub fn line_to(self, other: HexCoord) -> Vec<HexCoord> {
        let n = self.distance(other);
        if n == 0 {
            return vec![self];
        }
        // Nudge off exact cell edges so ties always break the same way.
        let (q0, r0) = (f64::from(self.q) + 1e-6, f64::from(self.r) + 1e-6);
        let (q1, r1) = (f64::from(other.q) + 1e-6, f64::from(other.r) + 1e-6);
        (0..=n)
            .map(|i| {
                let t = f64::from(i) / f64::from(n);
                HexCoord::round(q0 + (q1 - q0) * t, r0 + (r1 - r0) * t)
            })
            .collect()
    }
}

// Upper bound on up-front allocation for ring/area results.
const MAX_CAPACITY_HINT: usize = 1 << 16;

/// Number of cells within `radius`, `3n(n+1) + 1`, as an allocation hint.
fn area_capacity(radius: u32) -> usize {
    let n = radius as usize;
    n.checked_add(1)
        .and_then(|m| m.checked_mul(n))
        .and_then(|m| m.checked_mul(3))
        .and_then(|m| m.checked_add(1))
        .unwrap_or(usize::MAX)
        .min(MAX_CAPACITY_HINT)
}

/// Round fractional cube coordinates to the nearest valid cell.
///
/// Each component is rounded on its own, then the one that moved the most
/// is recomputed from the other two so that `x + y + z == 0` holds.
/// Components beyond the `i32` range saturate to `i32::MIN`/`i32::MAX`
/// and NaN becomes 0; callers must not rely on either.
pub(crate) fn cube_round(x: f64, y: f64, z: f64) -> [i32; 3] {
    let (mut rx, mut ry, mut rz) = (x.round(), y.round(), z.round());
    let dx = (rx - x).abs();
    let dy = (ry - y).abs();
    let dz = (rz - z).abs();

    if dx > dy && dx > dz {
        rx = -ry - rz;
    } else if dy > dz {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }
    [rx as i32, ry as i32, rz as i32]
}

impl Add for HexCoord {
    type Output = HexCoord;

    fn add(self, rhs: HexCoord) -> HexCoord {
        HexCoord::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for HexCoord {
    type Output = HexCoord;

    fn sub(self, rhs: HexCoord) -> HexCoord {
        HexCoord::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Mul<i32> for HexCoord {
    type Output = HexCoord;

    fn mul(self, rhs: i32) -> HexCoord {
        HexCoord::new(self.q * rhs, self.r * rhs)
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
