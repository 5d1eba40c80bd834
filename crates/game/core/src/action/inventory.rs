//! Inventory actions: drop, equip toggle and consumables.

use crate::env::{ConsumableEffect, EquipSlotKind, ItemDefinition, OracleError};
use crate::event::{ColorTag, TurnEvent};
use crate::state::{ActorState, EquipSlot, ItemId, Position};
use crate::status::cure;

use super::context::TurnContext;
use super::error::{ActionError, Impossible};
use super::spell;

/// Definition of an item held by the acting entity.
fn held_definition(ctx: &TurnContext<'_>, item: ItemId) -> Result<ItemDefinition, ActionError> {
    let actor = ctx.state.actor(ctx.actor).ok_or(ActionError::ActorNotFound)?;
    let instance = actor
        .inventory
        .get(item)
        .ok_or(ActionError::ItemNotFound(item))?;
    Ok(ctx
        .items
        .definition(instance.handle)
        .ok_or(OracleError::ItemNotFound(instance.handle))?)
}

/// Unequips `item` when needed, then places it on the ground.
pub fn drop_item(ctx: &mut TurnContext<'_>, item: ItemId) -> Result<(), ActionError> {
    let def = held_definition(ctx, item)?;
    let actor = ctx
        .state
        .actor_mut(ctx.actor)
        .ok_or(ActionError::ActorNotFound)?;
    let position = actor.position;
    actor.equipment.unequip(item);
    let instance = actor
        .inventory
        .remove(item)
        .ok_or(ActionError::ItemNotFound(item))?;
    ctx.state.world.drop_item(position, instance);

    ctx.out
        .say(format!("You dropped the {}.", def.name), ColorTag::Text);
    ctx.out.emit(TurnEvent::ItemDropped {
        actor: ctx.actor,
        item,
    });
    Ok(())
}

/// Slot an item of `kind` goes into: accessories fill slot 1, then slot 2.
fn target_slot(actor: &ActorState, kind: EquipSlotKind) -> EquipSlot {
    match kind {
        EquipSlotKind::Melee => EquipSlot::Melee,
        EquipSlotKind::Ranged => EquipSlot::Ranged,
        EquipSlotKind::Armor => EquipSlot::Armor,
        EquipSlotKind::Accessory => {
            let first = actor.equipment.get(EquipSlot::Accessory1);
            let second = actor.equipment.get(EquipSlot::Accessory2);
            if first.is_some() && second.is_none() {
                EquipSlot::Accessory2
            } else {
                EquipSlot::Accessory1
            }
        }
    }
}

/// Equips `item`, or unequips it when it is already worn.
///
/// Equipping into an occupied slot replaces the previous item.
pub fn toggle_equip(ctx: &mut TurnContext<'_>, item: ItemId) -> Result<(), ActionError> {
    let def = held_definition(ctx, item)?;
    let kind = def.slot.ok_or(Impossible::NotEquippable)?;
    let actor_id = ctx.actor;
    let actor = ctx
        .state
        .actor_mut(actor_id)
        .ok_or(ActionError::ActorNotFound)?;

    if actor.equipment.unequip(item).is_some() {
        ctx.out
            .say(format!("You remove the {}.", def.name), ColorTag::Text);
        ctx.out.emit(TurnEvent::ItemUnequipped {
            actor: actor_id,
            item,
        });
        return Ok(());
    }

    let slot = target_slot(actor, kind);
    let replaced = actor.equipment.equip(slot, item);
    if let Some(previous) = replaced {
        ctx.out.emit(TurnEvent::ItemUnequipped {
            actor: actor_id,
            item: previous,
        });
    }
    ctx.out
        .say(format!("You equip the {}.", def.name), ColorTag::Text);
    ctx.out.emit(TurnEvent::ItemEquipped {
        actor: actor_id,
        item,
    });
    Ok(())
}

/// Uses a consumable. The item is removed once its effect has applied.
pub fn use_item(
    ctx: &mut TurnContext<'_>,
    item: ItemId,
    target: Option<Position>,
) -> Result<(), ActionError> {
    let def = held_definition(ctx, item)?;
    let effect = def.consumable.ok_or(Impossible::NotUsable)?;
    let actor_id = ctx.actor;
    let actor = ctx.state.actor(actor_id).ok_or(ActionError::ActorNotFound)?;

    match effect {
        ConsumableEffect::Heal(amount) | ConsumableEffect::HealAndCure(amount) => {
            if actor.hp.is_full() {
                return Err(Impossible::HealthFull.into());
            }
            let recovered = ctx
                .state
                .actor_mut(actor_id)
                .map_or(0, |a| a.heal_hp(amount));
            ctx.out.say(
                format!("You consume the {}, and recover {recovered} HP!", def.name),
                ColorTag::HealthRecovered,
            );
            ctx.out.emit(TurnEvent::Healed {
                actor: actor_id,
                amount: recovered,
            });
            if matches!(effect, ConsumableEffect::HealAndCure(_)) {
                cure(ctx.state, actor_id, &mut ctx.out);
            }
        }
        ConsumableEffect::RestoreMana(amount) => {
            if actor.mana.is_full() {
                return Err(Impossible::ManaFull.into());
            }
            let restored = ctx
                .state
                .actor_mut(actor_id)
                .map_or(0, |a| a.heal_mana(amount));
            ctx.out.say(
                format!("You consume the {}, and recover {restored} MP!", def.name),
                ColorTag::HealthRecovered,
            );
            ctx.out.emit(TurnEvent::ManaRestored {
                actor: actor_id,
                amount: restored,
            });
        }
        ConsumableEffect::Cast(handle) => {
            let spell_def = ctx
                .env
                .spells()?
                .spell(handle)
                .ok_or(OracleError::SpellNotFound(handle))?;
            let targets = spell::prepare(ctx, &spell_def, target)?;
            ctx.out
                .say(format!("You read the {}.", def.name), ColorTag::Text);
            spell::apply(ctx, &spell_def, &targets);
        }
    }

    if let Some(actor) = ctx.state.actor_mut(actor_id) {
        actor.equipment.unequip(item);
        actor.inventory.remove(item);
    }
    ctx.out.emit(TurnEvent::ItemConsumed {
        actor: actor_id,
        item,
    });
    Ok(())
}
