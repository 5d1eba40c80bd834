use crate::event::TurnEvent;

use super::context::TurnContext;
use super::error::{ActionError, Impossible};
use super::types::Direction;

/// Steps the acting entity one cell in `direction`.
///
/// Fails with `Impossible::Blocked` when the destination is outside the map,
/// not walkable, taken by a blocking entity, or holds a chest and the mover
/// is not the player.
pub fn step(ctx: &mut TurnContext<'_>, direction: Direction) -> Result<(), ActionError> {
    let actor = ctx.state.actor(ctx.actor).ok_or(ActionError::ActorNotFound)?;
    let from = actor.position;
    let to = direction.apply(from);

    let blocked = !ctx.map.contains(to)
        || !ctx.map.is_walkable(to)
        || ctx.state.blocking_entity_at(to).is_some()
        || (!actor.is_player() && ctx.state.chest_at(to).is_some());
    if blocked {
        return Err(Impossible::Blocked.into());
    }

    if let Some(actor) = ctx.state.actor_mut(ctx.actor) {
        actor.position = to;
    }
    ctx.out.emit(TurnEvent::Moved {
        actor: ctx.actor,
        from,
        to,
    });
    Ok(())
}
