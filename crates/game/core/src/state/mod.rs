//! Authoritative game state representation.
//!
//! This module owns the data structures that describe actors, world features
//! and turn bookkeeping. Callers query this state freely but mutate it through
//! the engine and the rule modules.
pub mod types;

pub use types::{
    ActorState, AffinityProfile, ChestState, ConditionKind, ConditionRegistry, ConditionState,
    DamageMultiplier, ElementAffinity, ElementKind, EntityId, EquipSlot, Equipment, Faction,
    GroundItem, Holds, InventoryState, ItemHandle, ItemId, ItemInstance, Position, ResourceMeter,
    SpecialAbility, SpecialAttackKind, SpecialAttackProfile, TurnState, WorldState,
    effective_bonus,
};

use crate::event::{ColorTag, TurnEvent, TurnOutput};

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub turn: TurnState,
    /// Every actor, living or dead. Dead actors stay as remains.
    pub actors: Vec<ActorState>,
    pub world: WorldState,
    /// Item instance allocator; ids are never reused.
    next_item_id: u32,
}

impl GameState {
    /// Creates an empty state with the given game seed.
    pub fn new(seed: u64) -> Self {
        Self {
            turn: TurnState::new(seed),
            actors: Vec::new(),
            world: WorldState::new(),
            next_item_id: 1,
        }
    }

    /// Adds an actor. An existing actor with the same id is replaced.
    pub fn spawn(&mut self, actor: ActorState) {
        match self.actors.iter_mut().find(|a| a.id == actor.id) {
            Some(slot) => *slot = actor,
            None => self.actors.push(actor),
        }
    }

    /// Allocates a fresh item instance for `handle`.
    pub fn create_item(&mut self, handle: ItemHandle) -> ItemInstance {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        ItemInstance::new(id, handle)
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.actor(EntityId::PLAYER)
    }

    /// Living actor standing at `position`.
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.actors
            .iter()
            .find(|a| a.alive && a.position == position)
    }

    /// Any actor at `position` that blocks movement.
    pub fn blocking_entity_at(&self, position: Position) -> Option<&ActorState> {
        self.actors
            .iter()
            .find(|a| a.blocks_movement && a.position == position)
    }

    pub fn chest_at(&self, position: Position) -> Option<&ChestState> {
        self.world.chest_at(position)
    }

    pub fn living_actors(&self) -> impl Iterator<Item = &ActorState> + '_ {
        self.actors.iter().filter(|a| a.alive)
    }

    /// Deals `amount` damage to `target`, running death handling when HP hits zero.
    ///
    /// Returns the HP actually removed. Damage to the dead is a no-op.
    pub fn damage_actor(&mut self, target: EntityId, amount: u32, out: &mut TurnOutput) -> u32 {
        let Some(actor) = self.actor_mut(target) else {
            return 0;
        };
        let dealt = actor.take_damage(amount);
        if actor.alive && actor.hp.is_empty() {
            self.kill(target, out);
        }
        dealt
    }

    /// Runs death handling exactly once.
    ///
    /// The actor becomes non-blocking remains, loses its AI and every
    /// condition, and every grab or swallow link involving it is released.
    pub fn kill(&mut self, target: EntityId, out: &mut TurnOutput) {
        let Some(actor) = self.actor_mut(target) else {
            return;
        };
        if !actor.alive {
            return;
        }
        actor.alive = false;
        actor.hp.current = 0;
        actor.blocks_movement = false;
        actor.ai = None;
        actor.conditions.clear_all();
        actor.holds = Holds::default();

        if target.is_player() {
            out.say("You died!", ColorTag::PlayerDeath);
        } else {
            out.say(
                format!("{} is dead!", actor.display_name()),
                ColorTag::EnemyDeath,
            );
            actor.name = format!("remains of {}", actor.name);
        }
        let xp_given = if target.is_player() { 0 } else { actor.xp_given };
        out.emit(TurnEvent::Died { actor: target });
        tracing::debug!(target: "core::state", actor = %target, "actor died");

        self.release_links_to(target, out);
        self.award_xp(xp_given, out);
    }

    /// Credits the living player with experience from a kill.
    fn award_xp(&mut self, amount: u32, out: &mut TurnOutput) {
        if amount == 0 {
            return;
        }
        let Some(player) = self.actor_mut(EntityId::PLAYER).filter(|p| p.alive) else {
            return;
        };
        player.xp = player.xp.saturating_add(amount);
        out.say(format!("You gain {amount} experience points."), ColorTag::Text);
        out.emit(TurnEvent::ExperienceGained {
            actor: EntityId::PLAYER,
            amount,
        });
    }

    /// Frees every actor held (grabbed or swallowed) by `holder`, and clears
    /// swallow links pointing at it.
    fn release_links_to(&mut self, holder: EntityId, out: &mut TurnOutput) {
        for actor in self.actors.iter_mut().filter(|a| a.id != holder) {
            if actor.holds.grabbed_by == Some(holder) {
                actor.holds.grabbed_by = None;
                actor.conditions.clear(ConditionKind::Grab);
                if actor.is_player() {
                    out.say("You are free from the grab.", ColorTag::Text);
                }
                out.emit(TurnEvent::Released {
                    actor: actor.id,
                    holder,
                });
            }
            if actor.holds.ingested_by == Some(holder) {
                actor.holds.ingested_by = None;
                if actor.is_player() {
                    out.say("You are released from the belly.", ColorTag::Text);
                }
                out.emit(TurnEvent::Released {
                    actor: actor.id,
                    holder,
                });
            }
            if actor.holds.ingesting == Some(holder) {
                actor.holds.ingesting = None;
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
