//! Item-related state types.
//!
//! - [`ItemHandle`]: reference to a static item definition (looked up via Env)
//! - [`ItemId`]: identity of one concrete item instance
//! - [`ItemInstance`]: an instance carried in an inventory, a chest or on the ground

use super::Position;

/// Reference to an item definition stored outside the core (lookup via Env).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

/// Unique identity of an item instance. Allocated by [`crate::state::GameState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// A concrete item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub id: ItemId,
    pub handle: ItemHandle,
    /// Damaged items grant half their bonuses and break on the next rot,
    /// corrosion or dispel hit.
    pub damaged: bool,
}

impl ItemInstance {
    pub fn new(id: ItemId, handle: ItemHandle) -> Self {
        Self {
            id,
            handle,
            damaged: false,
        }
    }
}

/// Item lying on the floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItem {
    pub position: Position,
    pub item: ItemInstance,
}
