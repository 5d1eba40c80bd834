//! Spell casting.
//!
//! Casting is split in two phases so that every rejection happens before any
//! mutation: [`prepare`] validates the target selection and the effect, and
//! [`apply`] performs it. Scrolls reuse both phases without the mana cost.

use crate::env::{OracleError, SpellDefinition, SpellEffect, SpellHandle, SpellTargeting};
use crate::event::{ColorTag, TurnEvent};
use crate::state::{EntityId, Position};
use crate::status::{apply_condition, cure};

use super::context::TurnContext;
use super::error::{ActionError, Impossible};

/// Casts a known spell from the actor's spellbook, spending mana.
pub fn cast(
    ctx: &mut TurnContext<'_>,
    spell: SpellHandle,
    target: Option<Position>,
) -> Result<(), ActionError> {
    let caster = ctx.actor;
    let actor = ctx.state.actor(caster).ok_or(ActionError::ActorNotFound)?;
    if !actor.spellbook.contains(&spell) {
        return Err(Impossible::UnknownSpell.into());
    }
    let mana = actor.mana.current;

    let def = ctx
        .env
        .spells()?
        .spell(spell)
        .ok_or(OracleError::SpellNotFound(spell))?;
    if mana < def.mana_cost {
        return Err(Impossible::NotEnoughMana.into());
    }
    let targets = prepare(ctx, &def, target)?;

    if let Some(actor) = ctx.state.actor_mut(caster) {
        actor.mana.drain(def.mana_cost);
    }
    ctx.out
        .say(format!("You cast {}.", def.name), ColorTag::Text);
    tracing::debug!(
        target: "core::turn",
        caster = %caster,
        spell = %def.name,
        targets = targets.len(),
        "spell cast"
    );
    apply(ctx, &def, &targets);
    Ok(())
}

/// Selects and validates the targets of `def` without touching state.
pub(super) fn prepare(
    ctx: &TurnContext<'_>,
    def: &SpellDefinition,
    target: Option<Position>,
) -> Result<Vec<EntityId>, ActionError> {
    let targets = select_targets(ctx, def, target)?;
    if def.effect == SpellEffect::Cure {
        let all_full = targets
            .iter()
            .filter_map(|id| ctx.state.actor(*id))
            .all(|a| a.hp.is_full());
        if all_full {
            return Err(Impossible::HealthFull.into());
        }
    }
    Ok(targets)
}

fn select_targets(
    ctx: &TurnContext<'_>,
    def: &SpellDefinition,
    target: Option<Position>,
) -> Result<Vec<EntityId>, ActionError> {
    let caster = ctx.state.actor(ctx.actor).ok_or(ActionError::ActorNotFound)?;
    let origin = caster.position;

    match def.targeting {
        SpellTargeting::Caster => Ok(vec![caster.id]),
        SpellTargeting::Nearest => {
            // Anything strictly closer than range + 1 is in reach.
            let reach = def.range.saturating_add(1);
            let reach = reach.saturating_mul(reach);
            ctx.state
                .living_actors()
                .filter(|a| a.id != caster.id && ctx.map.is_visible(a.position))
                .map(|a| (a.position.distance_sq(origin), a.id))
                .filter(|(distance, _)| *distance < reach)
                .min_by_key(|(distance, _)| *distance)
                .map(|(_, id)| vec![id])
                .ok_or_else(|| Impossible::NoEnemyInRange.into())
        }
        SpellTargeting::Single => {
            let cell = target.ok_or(Impossible::NoTargetSelected)?;
            if !ctx.map.is_visible(cell) {
                return Err(Impossible::TargetNotVisible.into());
            }
            let victim = ctx
                .state
                .actor_at(cell)
                .ok_or(Impossible::NoTargetSelected)?;
            if victim.id == caster.id {
                return Err(Impossible::SelfTarget.into());
            }
            if def.range > 0 && cell.distance_sq(origin) > def.range.saturating_mul(def.range) {
                return Err(Impossible::OutOfRange.into());
            }
            Ok(vec![victim.id])
        }
        SpellTargeting::Area => {
            let cell = target.ok_or(Impossible::NoTargetSelected)?;
            if !ctx.map.is_visible(cell) {
                return Err(Impossible::TargetNotVisible.into());
            }
            let radius = def.radius.saturating_mul(def.radius);
            let hit: Vec<EntityId> = ctx
                .state
                .living_actors()
                .filter(|a| a.position.distance_sq(cell) <= radius)
                .map(|a| a.id)
                .collect();
            if hit.is_empty() {
                return Err(Impossible::NoTargetsInRadius.into());
            }
            Ok(hit)
        }
    }
}

/// Applies the effect of `def` to already validated targets.
pub(super) fn apply(ctx: &mut TurnContext<'_>, def: &SpellDefinition, targets: &[EntityId]) {
    let caster = ctx.actor;
    for &target in targets {
        match def.effect {
            SpellEffect::Damage => {
                let Some(name) = ctx.state.actor(target).map(|a| a.name.clone()) else {
                    continue;
                };
                ctx.out.say(
                    format!("The {} strikes {name} for {} hit points!", def.name, def.amount),
                    ColorTag::PlayerAttack,
                );
                let damage = ctx.state.damage_actor(target, def.amount, &mut ctx.out);
                ctx.out.emit(TurnEvent::SpellDamage {
                    caster,
                    target,
                    damage,
                });
            }
            SpellEffect::Status(kind) => {
                apply_condition(ctx.state, caster, target, kind, true, &mut ctx.out);
            }
            SpellEffect::Cure => {
                let amount = ctx
                    .state
                    .actor_mut(target)
                    .map_or(0, |a| a.heal_hp(def.amount));
                if amount > 0 {
                    ctx.out.say(
                        format!("You recover {amount} hit points."),
                        ColorTag::HealthRecovered,
                    );
                    ctx.out.emit(TurnEvent::Healed {
                        actor: target,
                        amount,
                    });
                }
                cure(ctx.state, target, &mut ctx.out);
            }
        }
    }
}
