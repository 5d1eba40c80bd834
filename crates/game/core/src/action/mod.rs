//! Action domain.
//!
//! An actor submits an [`Intent`]; the [`resolver`] turns it into a concrete
//! [`Action`] (or a consumed turn) according to the actor's conditions, and
//! [`perform`] executes the action against a [`TurnContext`].
//!
//! # Module Structure
//!
//! - `types`: directions, actions and intents
//! - `error`: [`Impossible`] rejections and [`ActionError`]
//! - `context`: per-turn execution context
//! - `resolver`: the condition-driven turn state machine
//! - `movement`, `combat`, `interact`, `inventory`, `spell`: leaf actions

mod combat;
mod context;
mod error;
mod interact;
mod inventory;
mod movement;
pub mod resolver;
mod spell;
mod types;

pub use context::TurnContext;
pub use error::{ActionError, Impossible};
pub use resolver::{Blocker, ConditionUpdate, Resolution, TurnPlan, bump, plan_turn};
pub use types::{Action, Direction, Intent};

use crate::event::TurnEvent;

/// Executes `action` for the acting entity of `ctx`.
///
/// Every rejection is raised before the first mutation, so an `Err` leaves
/// the state as it was.
pub fn perform(ctx: &mut TurnContext<'_>, action: Action) -> Result<(), ActionError> {
    match action {
        Action::Move(direction) => movement::step(ctx, direction),
        Action::Melee(direction) => combat::melee(ctx, direction),
        Action::Ranged { target } => combat::ranged(ctx, target),
        Action::Special(direction) => combat::special(ctx, direction),
        Action::Chest(direction) => interact::open_chest(ctx, direction),
        Action::Pickup => interact::pickup(ctx),
        Action::TakeStairs => interact::take_stairs(ctx),
        Action::Drop(item) => inventory::drop_item(ctx, item),
        Action::Equip(item) => inventory::toggle_equip(ctx, item),
        Action::UseItem { item, target } => inventory::use_item(ctx, item, target),
        Action::CastSpell { spell, target } => spell::cast(ctx, spell, target),
        Action::Wait => {
            ctx.out.emit(TurnEvent::Waited { actor: ctx.actor });
            Ok(())
        }
    }
}
