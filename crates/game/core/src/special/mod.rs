//! Special-attack engine.
//!
//! Abilities are recharge-gated per kind. When an actor attacks with its
//! specials, the first ready ability in priority order fires and its counter
//! resets; every other enabled ability recharges by one. When nothing is
//! ready the caller falls back to an ordinary melee blow.

mod effects;

use crate::action::{ActionError, TurnContext};
use crate::event::{ColorTag, TurnEvent, attack_color};
use crate::state::{EntityId, SpecialAttackKind};

/// Record of a fired ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialReport {
    pub kind: SpecialAttackKind,
    pub target: EntityId,
    /// HP removed from the target.
    pub damage: u32,
    /// The target was immune; nothing happened beyond the recharge reset.
    pub resisted: bool,
}

/// Fires the first ready special of `attacker` against `target`.
///
/// Returns `Ok(None)` when no ability is ready (every enabled ability still
/// recharges). Both actors must exist and be alive.
pub fn use_special(
    ctx: &mut TurnContext<'_>,
    attacker: EntityId,
    target: EntityId,
) -> Result<Option<SpecialReport>, ActionError> {
    let source = ctx.state.actor(attacker).ok_or(ActionError::ActorNotFound)?;
    let victim = ctx.state.actor(target).ok_or(ActionError::ActorNotFound)?;
    if !victim.alive {
        return Err(ActionError::ActorDead);
    }

    let ready = source.specials.first_ready();
    let immune = ready.is_some_and(|kind| victim.specials.is_immune_to(kind));
    let attacker_name = source.display_name();
    let target_name = victim.name.clone();
    let color = attack_color(attacker);

    if let Some(actor) = ctx.state.actor_mut(attacker) {
        actor.specials.recharge_all_except(ready);
        if let Some(kind) = ready {
            actor.specials.reset(kind);
        }
    }

    let Some(kind) = ready else {
        tracing::trace!(target: "core::special", attacker = %attacker, "no special ready");
        return Ok(None);
    };

    if immune {
        ctx.out.say(
            format!("{attacker_name} uses {kind} on {target_name}, but it resists!"),
            color,
        );
        ctx.out.emit(TurnEvent::SpecialResisted {
            attacker,
            target,
            kind,
        });
        return Ok(Some(SpecialReport {
            kind,
            target,
            damage: 0,
            resisted: true,
        }));
    }

    let ability = ctx
        .state
        .actor(attacker)
        .map(|a| *a.specials.get(kind))
        .unwrap_or_default();
    let damage = effects::fire(ctx, kind, &ability, attacker, target);

    if damage > 0 {
        ctx.out.say(
            format!("{attacker_name} hurts {target_name} for {damage} hit points."),
            color,
        );
        ctx.state.damage_actor(target, damage, &mut ctx.out);
    } else if kind != SpecialAttackKind::Ingest {
        ctx.out.say(format!("{target_name} takes no damage."), ColorTag::Text);
    }

    tracing::debug!(target: "core::special", attacker = %attacker, target = %target, kind = %kind, damage, "special fired");
    ctx.out.emit(TurnEvent::SpecialFired {
        attacker,
        target,
        kind,
        damage,
    });
    Ok(Some(SpecialReport {
        kind,
        target,
        damage,
        resisted: false,
    }))
}
