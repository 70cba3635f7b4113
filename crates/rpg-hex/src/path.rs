//! Shortest paths over the unbounded hex lattice.
//!
//! The lattice has no edges, so every search is bounded by the expansion
//! budget in [`PathOptions`] and, optionally, a radius around the start.
//! Search state is allocated per call.
//!
//! Equal-cost paths are resolved deterministically: the open set pops the
//! lowest `f = g + h`, then the lowest `h`, then the lowest `(q, r)`.
//! Neighbours are expanded in [`HexDirection::ALL`](crate::HexDirection::ALL)
//! order and a hex's parent is only replaced by a strictly cheaper route.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::config::PathOptions;
use crate::coord::HexCoord;
use crate::error::{PathError, PathResult};

/// Which hexes can be entered, and what entering them costs.
pub trait Passability {
    /// Returns `true` if a mover may enter `hex`.
    fn is_passable(&self, hex: HexCoord) -> bool;

    /// Cost of stepping into `hex`. Values below 1 are treated as 1.
    fn step_cost(&self, _hex: HexCoord) -> u32 {
        1
    }
}

impl<F> Passability for F
where
    F: Fn(HexCoord) -> bool,
{
    fn is_passable(&self, hex: HexCoord) -> bool {
        self(hex)
    }
}

/// Every hex is passable at unit cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct Open;

impl Passability for Open {
    fn is_passable(&self, _hex: HexCoord) -> bool {
        true
    }
}

/// Blocked hexes plus per-hex movement costs over an otherwise open lattice.
#[derive(Debug, Clone)]
pub struct TerrainMap {
    blocked: HashSet<HexCoord>,
    costs: HashMap<HexCoord, u32>,
    default_cost: u32,
}

impl Default for TerrainMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainMap {
    /// An open map where every step costs 1.
    pub fn new() -> Self {
        Self {
            blocked: HashSet::new(),
            costs: HashMap::new(),
            default_cost: 1,
        }
    }

    /// Set the cost of hexes without an explicit override.
    pub fn with_default_cost(mut self, cost: u32) -> Self {
        self.default_cost = cost;
        self
    }

    /// Mark a hex impassable.
    pub fn block(&mut self, hex: HexCoord) {
        self.blocked.insert(hex);
    }

    /// Mark several hexes impassable.
    pub fn block_all(&mut self, hexes: impl IntoIterator<Item = HexCoord>) {
        self.blocked.extend(hexes);
    }

    /// Make a previously blocked hex passable again.
    pub fn unblock(&mut self, hex: HexCoord) {
        self.blocked.remove(&hex);
    }

    /// Override the cost of entering a hex (difficult terrain and the like).
    pub fn set_cost(&mut self, hex: HexCoord, cost: u32) {
        self.costs.insert(hex, cost);
    }

    /// Returns `true` if the hex is blocked.
    pub fn is_blocked(&self, hex: HexCoord) -> bool {
        self.blocked.contains(&hex)
    }

    /// The cost of entering a hex, ignoring whether it is blocked.
    pub fn cost_of(&self, hex: HexCoord) -> u32 {
        self.costs.get(&hex).copied().unwrap_or(self.default_cost)
    }
}

impl Passability for TerrainMap {
    fn is_passable(&self, hex: HexCoord) -> bool {
        !self.is_blocked(hex)
    }

    fn step_cost(&self, hex: HexCoord) -> u32 {
        self.cost_of(hex)
    }
}

/// A route from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexPath {
    /// Hexes in walking order.
    pub hexes: Vec<HexCoord>,
    /// Summed step costs of every hex after the start.
    pub cost: u32,
}

impl HexPath {
    /// First hex of the path.
    pub fn start(&self) -> Option<HexCoord> {
        self.hexes.first().copied()
    }

    /// Last hex of the path.
    pub fn goal(&self) -> Option<HexCoord> {
        self.hexes.last().copied()
    }

    /// Number of hexes, counting start and goal.
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Returns `true` if the path holds no hexes.
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Number of moves needed to walk the path.
    pub fn steps(&self) -> usize {
        self.hexes.len().saturating_sub(1)
    }

    /// Iterate over the hexes in walking order.
    pub fn iter(&self) -> std::slice::Iter<'_, HexCoord> {
        self.hexes.iter()
    }
}

impl<'a> IntoIterator for &'a HexPath {
    type Item = &'a HexCoord;
    type IntoIter = std::slice::Iter<'a, HexCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    f: u32,
    h: u32,
    g: u32,
    pos: HexCoord,
}

// BinaryHeap is a max-heap, so every comparison is flipped.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.pos.cmp(&self.pos))
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn outside_radius(start: HexCoord, hex: HexCoord, options: &PathOptions) -> bool {
    options
        .max_radius
        .is_some_and(|radius| start.distance(hex) > radius)
}

/// Find a cheapest path from `start` to `goal`.
///
/// The start hex is never checked for passability; it is where the mover
/// already stands. A blocked goal fails immediately.
pub fn find_path<P>(
    start: HexCoord,
    goal: HexCoord,
    terrain: &P,
    options: &PathOptions,
) -> PathResult<HexPath>
where
    P: Passability + ?Sized,
{
    trace!(%start, %goal, "find_path");
    if !terrain.is_passable(goal) {
        debug!(%goal, "goal is impassable");
        return Err(PathError::GoalBlocked(goal));
    }
    if start == goal {
        return Ok(HexPath {
            hexes: vec![start],
            cost: 0,
        });
    }
    if outside_radius(start, goal, options) {
        debug!(%start, %goal, "goal lies outside the search radius");
        return Err(PathError::Unreachable {
            from: start,
            to: goal,
        });
    }

    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<HexCoord, HexCoord> = HashMap::new();
    let mut best: HashMap<HexCoord, u32> = HashMap::new();
    let mut closed: HashSet<HexCoord> = HashSet::new();
    let mut expanded = 0usize;

    let h = start.distance(goal);
    best.insert(start, 0);
    open.push(Node {
        f: h,
        h,
        g: 0,
        pos: start,
    });

    while let Some(current) = open.pop() {
        if closed.contains(&current.pos) {
            continue;
        }
        if current.pos == goal {
            let hexes = reconstruct_path(&came_from, goal);
            trace!(len = hexes.len(), cost = current.g, expanded, "path found");
            return Ok(HexPath {
                hexes,
                cost: current.g,
            });
        }
        if expanded >= options.max_steps {
            debug!(limit = options.max_steps, "path search budget exceeded");
            return Err(PathError::BudgetExceeded {
                limit: options.max_steps,
            });
        }
        expanded += 1;
        closed.insert(current.pos);

        for next in current.pos.neighbors() {
            if closed.contains(&next)
                || outside_radius(start, next, options)
                || !terrain.is_passable(next)
            {
                continue;
            }
            let g = current.g.saturating_add(terrain.step_cost(next).max(1));
            if best.get(&next).is_none_or(|&known| g < known) {
                best.insert(next, g);
                came_from.insert(next, current.pos);
                let h = next.distance(goal);
                open.push(Node {
                    f: g.saturating_add(h),
                    h,
                    g,
                    pos: next,
                });
            }
        }
    }

    debug!(%start, %goal, expanded, "goal unreachable");
    Err(PathError::Unreachable {
        from: start,
        to: goal,
    })
}

fn reconstruct_path(
    came_from: &HashMap<HexCoord, HexCoord>,
    mut current: HexCoord,
) -> Vec<HexCoord> {
    let mut path = vec![current];
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Every hex reachable from `start` for at most `budget` movement, with the
/// cheapest cost to reach it. The start is always included at cost 0.
///
/// `options` bounds the search like [`find_path`]: hexes beyond
/// `max_radius` are never entered, and once `max_steps` hexes are settled
/// the search stops and returns only those, each with its final cost.
pub fn reachable<P>(
    start: HexCoord,
    budget: u32,
    terrain: &P,
    options: &PathOptions,
) -> HashMap<HexCoord, u32>
where
    P: Passability + ?Sized,
{
    let mut settled: HashMap<HexCoord, u32> = HashMap::new();
    let mut best: HashMap<HexCoord, u32> = HashMap::new();
    let mut open = BinaryHeap::new();
    best.insert(start, 0);
    open.push(Reverse((0u32, start)));

    while let Some(Reverse((cost, pos))) = open.pop() {
        if settled.contains_key(&pos) {
            continue;
        }
        if settled.len() >= options.max_steps {
            debug!(
                %start,
                limit = options.max_steps,
                "movement range search budget exceeded"
            );
            break;
        }
        settled.insert(pos, cost);
        for next in pos.neighbors() {
            if settled.contains_key(&next)
                || outside_radius(start, next, options)
                || !terrain.is_passable(next)
            {
                continue;
            }
            let g = cost.saturating_add(terrain.step_cost(next).max(1));
            if g > budget {
                continue;
            }
            if best.get(&next).is_none_or(|&known| g < known) {
                best.insert(next, g);
                open.push(Reverse((g, next)));
            }
        }
    }
    trace!(%start, budget, count = settled.len(), "reachable hexes");
    settled
}
