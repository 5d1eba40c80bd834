//! Core action types.
//!
//! - [`Direction`]: the eight compass offsets
//! - [`Action`]: a concrete, fully resolved action
//! - [`Intent`]: what an actor asks for before condition overrides are applied

use crate::env::SpellHandle;
use crate::state::{ItemId, Position};

// ============================================================================
// Direction
// ============================================================================

/// Compass direction on the grid. Screen coordinates: y grows southward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions; a uniform roll indexes into this table.
    pub const ALL: [Direction; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Offset `(dx, dy)` for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }

    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Position one step from `from`.
    pub const fn apply(self, from: Position) -> Position {
        let (dx, dy) = self.offset();
        from.offset(dx, dy)
    }

    /// Direction of a single-step delta; each component is clamped to -1..=1.
    pub fn toward(from: Position, to: Position) -> Option<Self> {
        let dx = (to.x - from.x).signum();
        let dy = (to.y - from.y).signum();
        Self::ALL.into_iter().find(|d| d.offset() == (dx, dy))
    }
}

// ============================================================================
// Actions
// ============================================================================

/// A concrete action the rules can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(Direction),
    Melee(Direction),
    /// Shoot at a cell; `None` fires into the void.
    Ranged { target: Option<Position> },
    /// Adjacent special attack; falls back to melee when nothing is ready.
    Special(Direction),
    Chest(Direction),
    Pickup,
    Drop(ItemId),
    /// Equip toggle: equipping the item already in its slot unequips it.
    Equip(ItemId),
    UseItem {
        item: ItemId,
        target: Option<Position>,
    },
    CastSpell {
        spell: SpellHandle,
        target: Option<Position>,
    },
    Wait,
    TakeStairs,
}

impl Action {
    /// Direction of a directional action.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Move(d) | Self::Melee(d) | Self::Special(d) | Self::Chest(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Self::Melee(_) | Self::Special(_) | Self::Ranged { .. })
    }
}

/// What an actor wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Step toward a neighbour cell: attack, open or move depending on what is there.
    Bump(Direction),
    /// A specific action.
    Act(Action),
}

impl Intent {
    /// True when blindness or confusion can redirect this intent.
    pub fn is_directional(&self) -> bool {
        match self {
            Self::Bump(_) => true,
            Self::Act(action) => action.direction().is_some(),
        }
    }
}

impl From<Action> for Intent {
    fn from(action: Action) -> Self {
        Self::Act(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_negates_offset() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            assert_eq!(direction.reversed().offset(), (-dx, -dy));
        }
    }

    #[test]
    fn toward_clamps_long_deltas() {
        let from = Position::new(2, 2);
        assert_eq!(
            Direction::toward(from, Position::new(9, 2)),
            Some(Direction::East)
        );
        assert_eq!(
            Direction::toward(from, Position::new(0, 0)),
            Some(Direction::NorthWest)
        );
        assert_eq!(Direction::toward(from, from), None);
    }
}
