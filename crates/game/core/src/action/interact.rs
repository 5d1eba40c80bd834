use crate::event::{ColorTag, TurnEvent};

use super::context::TurnContext;
use super::error::{ActionError, Impossible};
use super::types::Direction;

fn item_name(ctx: &TurnContext<'_>, handle: crate::state::ItemHandle) -> String {
    ctx.items
        .definition(handle)
        .map(|def| def.name)
        .unwrap_or_else(|| "item".to_owned())
}

/// Takes the single item out of the chest next to the actor.
pub fn open_chest(ctx: &mut TurnContext<'_>, direction: Direction) -> Result<(), ActionError> {
    let actor = ctx.state.actor(ctx.actor).ok_or(ActionError::ActorNotFound)?;
    let cell = direction.apply(actor.position);
    let full = actor.inventory.is_full();

    let chest = ctx.state.chest_at(cell).ok_or(Impossible::NoChest)?;
    if chest.locked {
        return Err(Impossible::ChestLocked.into());
    }
    let Some(item) = chest.item else {
        return Err(Impossible::ChestEmpty.into());
    };
    if full {
        return Err(Impossible::InventoryFull.into());
    }

    let name = item_name(ctx, item.handle);
    if let Some(chest) = ctx.state.world.chest_at_mut(cell) {
        chest.item = None;
    }
    if let Some(actor) = ctx.state.actor_mut(ctx.actor) {
        actor
            .inventory
            .push(item)
            .map_err(|_| Impossible::InventoryFull)?;
    }
    ctx.out
        .say(format!("You open the chest and find the {name}!"), ColorTag::Text);
    ctx.out.emit(TurnEvent::ChestLooted {
        actor: ctx.actor,
        item: item.id,
    });
    Ok(())
}

/// Picks up the item lying on the actor's cell.
pub fn pickup(ctx: &mut TurnContext<'_>) -> Result<(), ActionError> {
    let actor = ctx.state.actor(ctx.actor).ok_or(ActionError::ActorNotFound)?;
    let position = actor.position;
    if ctx.state.world.item_at(position).is_none() {
        return Err(Impossible::NothingToPickUp.into());
    }
    if actor.inventory.is_full() {
        return Err(Impossible::InventoryFull.into());
    }

    let item = ctx
        .state
        .world
        .take_item_at(position)
        .ok_or(Impossible::NothingToPickUp)?;
    let name = item_name(ctx, item.handle);
    if let Some(actor) = ctx.state.actor_mut(ctx.actor) {
        actor
            .inventory
            .push(item)
            .map_err(|_| Impossible::InventoryFull)?;
    }
    ctx.out
        .say(format!("You picked up the {name}!"), ColorTag::Text);
    ctx.out.emit(TurnEvent::ItemPickedUp {
        actor: ctx.actor,
        item: item.id,
    });
    Ok(())
}

/// Descends when the actor stands on the stairs.
///
/// Floor regeneration is left to the engine's floor collaborator.
pub fn take_stairs(ctx: &mut TurnContext<'_>) -> Result<(), ActionError> {
    let actor = ctx.state.actor(ctx.actor).ok_or(ActionError::ActorNotFound)?;
    if ctx.state.world.stairs != Some(actor.position) {
        return Err(Impossible::NoStairs.into());
    }

    ctx.state.world.depth += 1;
    let depth = ctx.state.world.depth;
    ctx.out.say("You descend the staircase.", ColorTag::Descend);
    ctx.out.emit(TurnEvent::Descended { depth });
    tracing::debug!(target: "core::turn", depth, "descended");
    Ok(())
}
