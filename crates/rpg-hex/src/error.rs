//! Error types for hex grids and path search.

use crate::coord::HexCoord;

/// Errors raised while building a hex grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HexError {
    /// The configured size is zero, negative, or not a finite number.
    #[error("invalid hex size {0}: must be a finite number greater than zero")]
    InvalidSize(f64),
}

/// Convenience result type for grid construction.
pub type HexResult<T> = Result<T, HexError>;

/// Why a path search ended without a path.
///
/// These are ordinary outcomes (blocked movement, out of range) rather than
/// faults; callers are expected to match on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The goal hex itself is impassable.
    #[error("goal {0} is impassable")]
    GoalBlocked(HexCoord),

    /// Every reachable hex was explored without finding the goal.
    #[error("no path from {from} to {to}")]
    Unreachable {
        /// Where the search started.
        from: HexCoord,
        /// The goal that could not be reached.
        to: HexCoord,
    },

    /// The search expanded its full node budget before reaching the goal.
    #[error("search budget of {limit} steps exceeded")]
    BudgetExceeded {
        /// The configured expansion limit.
        limit: usize,
    },
}

/// Convenience result type for path search.
pub type PathResult<T> = Result<T, PathError>;
