use crate::combat::{AttackStyle, miss_into_void, resolve_attack};
use crate::special::use_special;
use crate::state::{EntityId, Position};

use super::context::TurnContext;
use super::error::{ActionError, Impossible};
use super::types::Direction;

fn target_in(ctx: &TurnContext<'_>, cell: Position) -> Option<EntityId> {
    ctx.state
        .actor_at(cell)
        .map(|a| a.id)
        .filter(|id| *id != ctx.actor)
}

fn adjacent_target(ctx: &TurnContext<'_>, direction: Direction) -> Result<EntityId, ActionError> {
    let origin = ctx
        .state
        .actor(ctx.actor)
        .ok_or(ActionError::ActorNotFound)?
        .position;
    target_in(ctx, direction.apply(origin)).ok_or_else(|| Impossible::NothingToAttack.into())
}

pub fn melee(ctx: &mut TurnContext<'_>, direction: Direction) -> Result<(), ActionError> {
    let attacker = ctx.actor;
    let target = adjacent_target(ctx, direction)?;
    resolve_attack(ctx, attacker, target, AttackStyle::Melee)?;
    Ok(())
}

/// Shoots at `cell`. An empty or missing cell is a shot into the void.
pub fn ranged(ctx: &mut TurnContext<'_>, cell: Option<Position>) -> Result<(), ActionError> {
    let attacker = ctx.actor;
    match cell.and_then(|cell| target_in(ctx, cell)) {
        Some(target) => {
            resolve_attack(ctx, attacker, target, AttackStyle::Ranged)?;
        }
        None => miss_into_void(ctx, attacker),
    }
    Ok(())
}

/// Fires the first ready special; falls back to a melee blow otherwise.
pub fn special(ctx: &mut TurnContext<'_>, direction: Direction) -> Result<(), ActionError> {
    let attacker = ctx.actor;
    let target = adjacent_target(ctx, direction)?;
    if use_special(ctx, attacker, target)?.is_none() {
        resolve_attack(ctx, attacker, target, AttackStyle::Melee)?;
    }
    Ok(())
}
