//! Inventory system for actors.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::types::{ItemId, ItemInstance};

/// Ordered item list with a per-actor capacity.
///
/// Order matters: rot, corrosion, dispel and steal act on the first matching
/// item. A capacity of zero means the owner carries no inventory at all.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    capacity: usize,
    items: ArrayVec<ItemInstance, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    /// Creates an empty inventory. Capacity is clamped to `MAX_INVENTORY_SLOTS`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.min(GameConfig::MAX_INVENTORY_SLOTS),
            items: ArrayVec::new(),
        }
    }

    /// No inventory.
    pub fn none() -> Self {
        Self::with_capacity(0)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn has_storage(&self) -> bool {
        self.capacity > 0
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn items(&self) -> &[ItemInstance] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemInstance> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut ItemInstance> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Adds an item, handing it back when there is no room.
    pub fn push(&mut self, item: ItemInstance) -> Result<(), ItemInstance> {
        if self.is_full() {
            return Err(item);
        }
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes an item preserving the order of the rest.
    pub fn remove(&mut self, id: ItemId) -> Option<ItemInstance> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}
