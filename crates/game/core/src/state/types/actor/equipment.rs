//! Equipment slots for actors.
//!
//! Slots reference item instances that stay inside the owner's inventory.
//! Equipping never moves an item; dropping, stealing or destroying an item
//! must unequip it first.

use crate::state::types::ItemId;

/// Concrete equipment slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Melee,
    Ranged,
    Armor,
    Accessory1,
    Accessory2,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 5] = [
        Self::Melee,
        Self::Ranged,
        Self::Armor,
        Self::Accessory1,
        Self::Accessory2,
    ];

    /// Slots whose power bonus counts toward melee attacks.
    pub const MELEE_POWER: [EquipSlot; 4] =
        [Self::Melee, Self::Armor, Self::Accessory1, Self::Accessory2];

    /// Slots whose power bonus counts toward ranged attacks.
    pub const RANGED_POWER: [EquipSlot; 4] =
        [Self::Ranged, Self::Armor, Self::Accessory1, Self::Accessory2];
}

/// Equipped item per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub melee: Option<ItemId>,
    pub ranged: Option<ItemId>,
    pub armor: Option<ItemId>,
    pub accessory_1: Option<ItemId>,
    pub accessory_2: Option<ItemId>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<ItemId> {
        match slot {
            EquipSlot::Melee => self.melee,
            EquipSlot::Ranged => self.ranged,
            EquipSlot::Armor => self.armor,
            EquipSlot::Accessory1 => self.accessory_1,
            EquipSlot::Accessory2 => self.accessory_2,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<ItemId> {
        match slot {
            EquipSlot::Melee => &mut self.melee,
            EquipSlot::Ranged => &mut self.ranged,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Accessory1 => &mut self.accessory_1,
            EquipSlot::Accessory2 => &mut self.accessory_2,
        }
    }

    /// Puts `item` in `slot`, returning the previous occupant.
    pub fn equip(&mut self, slot: EquipSlot, item: ItemId) -> Option<ItemId> {
        self.slot_mut(slot).replace(item)
    }

    pub fn unequip_slot(&mut self, slot: EquipSlot) -> Option<ItemId> {
        self.slot_mut(slot).take()
    }

    /// Slot currently holding `item`.
    pub fn slot_of(&self, item: ItemId) -> Option<EquipSlot> {
        EquipSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) == Some(item))
    }

    pub fn is_equipped(&self, item: ItemId) -> bool {
        self.slot_of(item).is_some()
    }

    /// Removes `item` from whichever slot holds it.
    pub fn unequip(&mut self, item: ItemId) -> Option<EquipSlot> {
        let slot = self.slot_of(item)?;
        self.unequip_slot(slot);
        Some(slot)
    }

    pub fn is_empty(&self) -> bool {
        EquipSlot::ALL.iter().all(|slot| self.get(*slot).is_none())
    }

    /// Equipped items with their slots.
    pub fn equipped(&self) -> impl Iterator<Item = (EquipSlot, ItemId)> + '_ {
        EquipSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }
}
