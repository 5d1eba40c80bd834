use crate::state::ConditionKind;

/// Reference to a spell definition stored outside the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellHandle(pub u32);

pub trait SpellOracle: Send + Sync {
    fn spell(&self, handle: SpellHandle) -> Option<SpellDefinition>;
}

/// How a spell picks its targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SpellTargeting {
    /// Closest visible actor within range.
    Nearest,
    /// Actor on a chosen visible cell.
    Single,
    /// Every actor within `radius` of a chosen visible cell.
    Area,
    /// The caster.
    Caster,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SpellEffect {
    Damage,
    Status(ConditionKind),
    /// Heals `amount` and cures curable conditions.
    Cure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDefinition {
    pub handle: SpellHandle,
    pub name: String,
    pub mana_cost: u32,
    /// Damage dealt or HP healed.
    pub amount: u32,
    pub range: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub radius: u32,
    pub targeting: SpellTargeting,
    pub effect: SpellEffect,
}
