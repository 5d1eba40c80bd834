use crate::state::{ConditionKind, ElementKind, ItemHandle};

use super::SpellHandle;

pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Physical material of an item; decides which special attacks can ruin it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Material {
    #[default]
    None,
    Paper,
    Leather,
    Wood,
    Cloth,
    Glass,
    Metal,
}

impl Material {
    /// Rots away.
    pub const fn is_organic(self) -> bool {
        matches!(self, Self::Paper | Self::Leather | Self::Wood)
    }

    /// Corrodes.
    pub const fn is_metallic(self) -> bool {
        matches!(self, Self::Metal)
    }
}

/// Where an equippable item goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EquipSlotKind {
    Melee,
    Ranged,
    Armor,
    Accessory,
}

/// Effect of using a consumable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ConsumableEffect {
    Heal(u32),
    /// Heals and cures curable conditions.
    HealAndCure(u32),
    RestoreMana(u32),
    /// Scroll: casts the referenced spell without spending mana.
    Cast(SpellHandle),
}

/// Static item definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub material: Material,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magical: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: Option<EquipSlotKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_bonus: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_bonus: i32,
    /// Condition inflicted on hit while equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_effect: Option<ConditionKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_type: Option<ElementKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub projectile: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub consumable: Option<ConsumableEffect>,
}

impl ItemDefinition {
    /// Plain item with no bonuses.
    pub fn new(handle: ItemHandle, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
            material: Material::None,
            magical: false,
            slot: None,
            power_bonus: 0,
            defense_bonus: 0,
            status_effect: None,
            damage_type: None,
            projectile: None,
            consumable: None,
        }
    }

    #[must_use]
    pub fn equippable(mut self, slot: EquipSlotKind, power_bonus: i32, defense_bonus: i32) -> Self {
        self.slot = Some(slot);
        self.power_bonus = power_bonus;
        self.defense_bonus = defense_bonus;
        self
    }

    #[must_use]
    pub fn made_of(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    #[must_use]
    pub fn magical(mut self) -> Self {
        self.magical = true;
        self
    }

    #[must_use]
    pub fn inflicting(mut self, kind: ConditionKind) -> Self {
        self.status_effect = Some(kind);
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: ElementKind) -> Self {
        self.damage_type = Some(element);
        self
    }

    #[must_use]
    pub fn consumable(mut self, effect: ConsumableEffect) -> Self {
        self.consumable = Some(effect);
        self
    }

    pub fn is_equippable(&self) -> bool {
        self.slot.is_some()
    }
}
