//! Mutable world features layered on top of the static map.

use super::{GroundItem, ItemInstance, Position};

/// A chest holding at most one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChestState {
    pub position: Position,
    pub item: Option<ItemInstance>,
    pub locked: bool,
}

impl ChestState {
    pub fn new(position: Position, item: Option<ItemInstance>) -> Self {
        Self {
            position,
            item,
            locked: false,
        }
    }

    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

/// Runtime world data: chests, loose items and the stairs down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub chests: Vec<ChestState>,
    pub ground_items: Vec<GroundItem>,
    pub stairs: Option<Position>,
    /// Current dungeon floor, starting at 1.
    pub depth: u32,
}

impl WorldState {
    pub fn new() -> Self {
        Self {
            depth: 1,
            ..Self::default()
        }
    }

    pub fn chest_at(&self, position: Position) -> Option<&ChestState> {
        self.chests.iter().find(|chest| chest.position == position)
    }

    pub fn chest_at_mut(&mut self, position: Position) -> Option<&mut ChestState> {
        self.chests.iter_mut().find(|chest| chest.position == position)
    }

    /// First item lying at `position`.
    pub fn item_at(&self, position: Position) -> Option<&GroundItem> {
        self.ground_items.iter().find(|g| g.position == position)
    }

    pub fn take_item_at(&mut self, position: Position) -> Option<ItemInstance> {
        let index = self
            .ground_items
            .iter()
            .position(|g| g.position == position)?;
        Some(self.ground_items.remove(index).item)
    }

    pub fn drop_item(&mut self, position: Position, item: ItemInstance) {
        self.ground_items.push(GroundItem { position, item });
    }
}
