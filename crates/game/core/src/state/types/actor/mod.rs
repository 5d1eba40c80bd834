//! Actor-related state types.
//!
//! This module contains all types specific to actors:
//! - ActorState: main actor structure
//! - Equipment: slot assignments for carried items
//! - Inventory: item storage for actors

pub mod equipment;
pub mod inventory;

pub use equipment::{EquipSlot, Equipment};
pub use inventory::InventoryState;

use super::{
    AffinityProfile, ConditionKind, ConditionRegistry, ElementKind, EntityId, ItemId, Position,
    ResourceMeter, SpecialAttackProfile,
};
use crate::ai::AiBehavior;
use crate::env::{ItemDefinition, ItemOracle, SpellHandle};

/// Side an actor fights for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Faction {
    Hero,
    #[default]
    Monster,
}

/// Grab and swallow links between actors.
///
/// The grab condition flag itself lives in the condition registry; `grabbed_by`
/// records who to release from when either side dies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holds {
    pub grabbed_by: Option<EntityId>,
    pub ingested_by: Option<EntityId>,
    pub ingesting: Option<EntityId>,
}

/// Complete actor state.
///
/// # Invariants
///
/// - `0 <= hp.current <= hp.maximum`
/// - once `alive` is false it never becomes true again and further damage is ignored
/// - equipped item ids always refer to items in `inventory`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub faction: Faction,
    pub alive: bool,
    pub blocks_movement: bool,

    pub hp: ResourceMeter,
    pub mana: ResourceMeter,
    pub base_power: u32,
    pub base_defense: u32,
    /// Experience collected so far.
    pub xp: u32,
    /// Experience the player earns when this actor dies.
    pub xp_given: u32,

    pub conditions: ConditionRegistry,
    pub affinity: AffinityProfile,
    pub specials: SpecialAttackProfile,

    pub inventory: InventoryState,
    pub equipment: Equipment,
    pub spellbook: Vec<SpellHandle>,

    /// Decision policy; `None` for the player and for the dead.
    pub ai: Option<AiBehavior>,
    pub holds: Holds,
}

impl ActorState {
    /// Creates a living actor with full HP and no mana, conditions or items.
    pub fn new(id: EntityId, name: impl Into<String>, position: Position, max_hp: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            faction: if id.is_player() {
                Faction::Hero
            } else {
                Faction::Monster
            },
            alive: true,
            blocks_movement: true,
            hp: ResourceMeter::full(max_hp),
            mana: ResourceMeter::default(),
            base_power: 0,
            base_defense: 0,
            xp: 0,
            xp_given: 0,
            conditions: ConditionRegistry::new(),
            affinity: AffinityProfile::new(),
            specials: SpecialAttackProfile::new(),
            inventory: InventoryState::none(),
            equipment: Equipment::empty(),
            spellbook: Vec::new(),
            ai: None,
            holds: Holds::default(),
        }
    }

    #[must_use]
    pub fn with_stats(mut self, power: u32, defense: u32) -> Self {
        self.base_power = power;
        self.base_defense = defense;
        self
    }

    #[must_use]
    pub fn with_xp_given(mut self, xp: u32) -> Self {
        self.xp_given = xp;
        self
    }

    #[must_use]
    pub fn with_mana(mut self, max_mana: u32) -> Self {
        self.mana = ResourceMeter::full(max_mana);
        self
    }

    #[must_use]
    pub fn with_conditions(mut self, conditions: ConditionRegistry) -> Self {
        self.conditions = conditions;
        self
    }

    #[must_use]
    pub fn with_affinity(mut self, affinity: AffinityProfile) -> Self {
        self.affinity = affinity;
        self
    }

    #[must_use]
    pub fn with_specials(mut self, specials: SpecialAttackProfile) -> Self {
        self.specials = specials;
        self
    }

    #[must_use]
    pub fn with_inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = inventory;
        self
    }

    #[must_use]
    pub fn with_spells(mut self, spells: impl IntoIterator<Item = SpellHandle>) -> Self {
        self.spellbook = spells.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_ai(mut self, ai: AiBehavior) -> Self {
        self.ai = Some(ai);
        self
    }

    #[must_use]
    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.id.is_player()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_afflicted(&self, kind: ConditionKind) -> bool {
        self.conditions.is_afflicted(kind)
    }

    pub fn is_hostile_to(&self, other: &ActorState) -> bool {
        self.faction != other.faction
    }

    /// Name capitalized for the start of a message.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Subtracts HP, clamped at zero. Returns the HP actually removed.
    ///
    /// The dead take no damage. Death handling itself is done by
    /// [`crate::state::GameState::damage_actor`].
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        self.hp.drain(amount)
    }

    /// Restores HP up to the maximum; returns the amount recovered.
    pub fn heal_hp(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        self.hp.restore(amount)
    }

    /// Restores mana up to the maximum; returns the amount recovered.
    pub fn heal_mana(&mut self, amount: u32) -> u32 {
        self.mana.restore(amount)
    }

    // ========================================================================
    // Equipment-derived values
    // ========================================================================

    fn equipped_definition(
        &self,
        slot: EquipSlot,
        items: &(impl ItemOracle + ?Sized),
    ) -> Option<(ItemDefinition, bool)> {
        let id = self.equipment.get(slot)?;
        let item = self.inventory.get(id)?;
        items.definition(item.handle).map(|def| (def, item.damaged))
    }

    fn bonus_sum(
        &self,
        slots: &[EquipSlot],
        items: &(impl ItemOracle + ?Sized),
        pick: impl Fn(&ItemDefinition) -> i32,
    ) -> i32 {
        slots
            .iter()
            .filter_map(|slot| self.equipped_definition(*slot, items))
            .map(|(def, damaged)| effective_bonus(pick(&def), damaged))
            .sum()
    }

    /// Base power plus melee, armor and accessory bonuses.
    pub fn power_melee(&self, items: &(impl ItemOracle + ?Sized)) -> u32 {
        let bonus = self.bonus_sum(&EquipSlot::MELEE_POWER, items, |d| d.power_bonus);
        apply_bonus(self.base_power, bonus)
    }

    /// Base power plus ranged, armor and accessory bonuses.
    pub fn power_ranged(&self, items: &(impl ItemOracle + ?Sized)) -> u32 {
        let bonus = self.bonus_sum(&EquipSlot::RANGED_POWER, items, |d| d.power_bonus);
        apply_bonus(self.base_power, bonus)
    }

    /// Base defense plus the defense bonus of every equipped item.
    pub fn defense(&self, items: &(impl ItemOracle + ?Sized)) -> u32 {
        let bonus = self.bonus_sum(&EquipSlot::ALL, items, |d| d.defense_bonus);
        apply_bonus(self.base_defense, bonus)
    }

    /// Element of a melee blow: the weapon's damage type, else the innate one.
    pub fn melee_element(&self, items: &(impl ItemOracle + ?Sized)) -> Option<ElementKind> {
        match self.equipped_definition(EquipSlot::Melee, items) {
            Some((def, _)) => def.damage_type,
            None => self.affinity.attack_element(),
        }
    }

    /// Element of a ranged shot: the launcher's damage type, else the innate one.
    pub fn ranged_element(&self, items: &(impl ItemOracle + ?Sized)) -> Option<ElementKind> {
        match self.equipped_definition(EquipSlot::Ranged, items) {
            Some((def, _)) => def.damage_type,
            None => self.affinity.attack_element(),
        }
    }

    /// Projectile name used in ranged-attack messages.
    pub fn projectile_name(&self, items: &(impl ItemOracle + ?Sized)) -> String {
        self.equipped_definition(EquipSlot::Ranged, items)
            .and_then(|(def, _)| def.projectile)
            .unwrap_or_else(|| "projectile".to_owned())
    }

    /// Conditions this actor inflicts on hit.
    ///
    /// Wearing any equipment replaces the innate set with the status tags of
    /// the equipped items; the two sources never combine.
    pub fn effective_inflicts(&self, items: &(impl ItemOracle + ?Sized)) -> Vec<ConditionKind> {
        if self.equipment.is_empty() {
            return self.conditions.innate_inflicts().collect();
        }
        let mut kinds: Vec<ConditionKind> = EquipSlot::ALL
            .iter()
            .filter_map(|slot| self.equipped_definition(*slot, items))
            .filter_map(|(def, _)| def.status_effect)
            .collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }

    /// Inventory position of the first item matching `pred`.
    pub fn find_item(
        &self,
        items: &(impl ItemOracle + ?Sized),
        pred: impl Fn(&ItemDefinition) -> bool,
    ) -> Option<ItemId> {
        self.inventory.items().iter().find_map(|item| {
            let def = items.definition(item.handle)?;
            pred(&def).then_some(item.id)
        })
    }
}

/// Damaged items grant half their bonus, rounded half away from zero.
pub fn effective_bonus(bonus: i32, damaged: bool) -> i32 {
    if !damaged {
        return bonus;
    }
    let half = (bonus.abs() + 1) / 2;
    if bonus < 0 { -half } else { half }
}

fn apply_bonus(base: u32, bonus: i32) -> u32 {
    let total = i64::from(base) + i64::from(bonus);
    total.clamp(0, i64::from(u32::MAX)) as u32
}
