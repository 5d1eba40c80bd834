//! Grid pathfinding used by the AI decision layer.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::action::Direction;
use crate::state::{GameState, Position};

use super::MapOracle;

/// Finds the next step from `from` toward `to`.
pub trait Pathfinder {
    /// First position of a path from `from` to `to`, excluding `from`.
    ///
    /// `None` when no path exists or the two positions coincide.
    fn next_step(
        &self,
        map: &dyn MapOracle,
        state: &GameState,
        from: Position,
        to: Position,
    ) -> Option<Position>;
}

/// Dijkstra over walkable tiles.
///
/// Each tile costs 1, plus `blocker_cost` when a blocking actor stands on it,
/// so monsters route around each other through open rooms but still queue up
/// in corridors. Cardinal steps multiply the tile cost by 2 and diagonal steps
/// by 3.
#[derive(Clone, Copy, Debug)]
pub struct DijkstraPathfinder {
    pub blocker_cost: u32,
    /// Exploration cap so unreachable targets cannot scan huge maps.
    pub max_nodes: usize,
}

impl DijkstraPathfinder {
    pub const CARDINAL_COST: u32 = 2;
    pub const DIAGONAL_COST: u32 = 3;

    pub fn new(blocker_cost: u32) -> Self {
        Self {
            blocker_cost,
            max_nodes: 4_096,
        }
    }

    pub fn from_config(config: &crate::config::GameConfig) -> Self {
        Self::new(config.path_blocker_cost)
    }

    fn tile_cost(
        &self,
        map: &dyn MapOracle,
        state: &GameState,
        position: Position,
        goal: Position,
    ) -> Option<u32> {
        if !map.contains(position) || !map.is_walkable(position) {
            return None;
        }
        if position != goal && state.blocking_entity_at(position).is_some() {
            return Some(1 + self.blocker_cost);
        }
        Some(1)
    }
}

impl Default for DijkstraPathfinder {
    fn default() -> Self {
        Self::new(crate::config::GameConfig::DEFAULT_PATH_BLOCKER_COST)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Frontier {
    cost: u32,
    position: Position,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest cost first (reverse comparison since BinaryHeap is max-heap)
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Pathfinder for DijkstraPathfinder {
    fn next_step(
        &self,
        map: &dyn MapOracle,
        state: &GameState,
        from: Position,
        to: Position,
    ) -> Option<Position> {
        if from == to {
            return None;
        }

        let mut best: HashMap<Position, u32> = HashMap::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut heap = BinaryHeap::new();
        best.insert(from, 0);
        heap.push(Frontier {
            cost: 0,
            position: from,
        });

        while let Some(Frontier { cost, position }) = heap.pop() {
            if position == to {
                break;
            }
            if cost > best.get(&position).copied().unwrap_or(u32::MAX) {
                continue;
            }
            if best.len() > self.max_nodes {
                return None;
            }
            for direction in Direction::ALL {
                let next = direction.apply(position);
                let Some(tile) = self.tile_cost(map, state, next, to) else {
                    continue;
                };
                let step = if direction.is_diagonal() {
                    Self::DIAGONAL_COST
                } else {
                    Self::CARDINAL_COST
                };
                let next_cost = cost.saturating_add(tile * step);
                if next_cost < best.get(&next).copied().unwrap_or(u32::MAX) {
                    best.insert(next, next_cost);
                    came_from.insert(next, position);
                    heap.push(Frontier {
                        cost: next_cost,
                        position: next,
                    });
                }
            }
        }

        // Walk back from the goal to the step right after `from`.
        let mut current = to;
        loop {
            let previous = *came_from.get(&current)?;
            if previous == from {
                return Some(current);
            }
            current = previous;
        }
    }
}
