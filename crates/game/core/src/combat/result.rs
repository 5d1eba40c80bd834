//! Attack resolution: compute, apply, narrate.

use crate::action::{ActionError, TurnContext};
use crate::config::GameConfig;
use crate::env::ItemOracle;
use crate::event::{ColorTag, TurnEvent, TurnOutput, attack_color};
use crate::state::{ActorState, ConditionKind, DamageMultiplier, EntityId};
use crate::status::apply_on_hit_conditions;

use super::damage::{final_damage, raw_damage};
use super::hit::{HitCheck, Impairment, check_hit};

/// Melee blow or ranged shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackStyle {
    Melee,
    Ranged,
}

/// How an attack ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Positive damage dealt.
    Hit,
    /// Raw damage was zero or negative.
    NoDamage,
    /// The defender is immune to the attack's element.
    Immune,
    /// An impaired attacker missed.
    Evaded(Impairment),
}

/// Full record of one attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker: EntityId,
    pub defender: EntityId,
    pub style: AttackStyle,
    pub raw: i64,
    pub multiplier: DamageMultiplier,
    pub damage: u32,
    pub outcome: AttackOutcome,
    pub killed: bool,
}

impl AttackReport {
    pub fn landed(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Hit)
    }
}

/// Pure attack computation; no state is touched.
pub fn compute_attack(
    attacker: &ActorState,
    defender: &ActorState,
    items: &dyn ItemOracle,
    style: AttackStyle,
    check: HitCheck,
) -> AttackReport {
    let (power, element) = match style {
        AttackStyle::Melee => (attacker.power_melee(items), attacker.melee_element(items)),
        AttackStyle::Ranged => (attacker.power_ranged(items), attacker.ranged_element(items)),
    };
    let bonus = if style == AttackStyle::Melee && attacker.is_afflicted(ConditionKind::Rage) {
        GameConfig::RAGE_POWER_BONUS
    } else {
        0
    };
    let raw = raw_damage(power, bonus, defender.defense(items));
    let multiplier = defender.affinity.multiplier(element);
    let damage = final_damage(raw, multiplier, check.hit);

    let outcome = match (check.hit, check.impairment) {
        (false, Some(impairment)) => AttackOutcome::Evaded(impairment),
        _ if raw <= 0 => AttackOutcome::NoDamage,
        _ if multiplier.is_zero() => AttackOutcome::Immune,
        _ => AttackOutcome::Hit,
    };

    AttackReport {
        attacker: attacker.id,
        defender: defender.id,
        style,
        raw,
        multiplier,
        damage,
        outcome,
        killed: false,
    }
}

/// Resolves an attack of `attacker_id` against `defender_id`.
///
/// Rolls the hit check, applies damage (running death handling when HP hits
/// zero), narrates the result and, when the blow landed on a survivor,
/// applies the attacker's on-hit conditions.
pub fn resolve_attack(
    ctx: &mut TurnContext<'_>,
    attacker_id: EntityId,
    defender_id: EntityId,
    style: AttackStyle,
) -> Result<AttackReport, ActionError> {
    let attacker = ctx.state.actor(attacker_id).ok_or(ActionError::ActorNotFound)?;
    let defender = ctx.state.actor(defender_id).ok_or(ActionError::ActorNotFound)?;

    let check = check_hit(attacker, &mut ctx.dice, ctx.config.impaired_hit_threshold);
    let mut report = compute_attack(attacker, defender, ctx.items, style, check);
    narrate(attacker, defender, ctx.items, &report, &mut ctx.out);

    if report.damage > 0 {
        ctx.state.damage_actor(defender_id, report.damage, &mut ctx.out);
        report.killed = ctx.state.actor(defender_id).is_some_and(|d| !d.alive);
    }
    tracing::debug!(
        target: "core::combat",
        attacker = %attacker_id,
        defender = %defender_id,
        raw = report.raw,
        damage = report.damage,
        outcome = ?report.outcome,
        "attack resolved"
    );
    ctx.out.emit(TurnEvent::Attack(report));

    if report.landed() && !report.killed {
        apply_on_hit_conditions(ctx.state, ctx.items, attacker_id, defender_id, &mut ctx.out);
    }
    Ok(report)
}

fn narrate(
    attacker: &ActorState,
    defender: &ActorState,
    items: &dyn ItemOracle,
    report: &AttackReport,
    out: &mut TurnOutput,
) {
    let color = attack_color(attacker.id);
    let desc = match report.style {
        AttackStyle::Melee => format!("{} attacks {}", attacker.display_name(), defender.name),
        AttackStyle::Ranged => format!(
            "{} shoots a {} at {}",
            attacker.display_name(),
            attacker.projectile_name(items),
            defender.name
        ),
    };

    match report.outcome {
        AttackOutcome::Hit => {
            out.say(format!("{desc} for {} hit points.", report.damage), color);
            match report.multiplier {
                DamageMultiplier::Critical => out.say("The damage is critical!", color),
                DamageMultiplier::Resisted => out.say("The damage is resisted!", color),
                _ => {}
            }
        }
        AttackOutcome::NoDamage => out.say(format!("{desc} but does no damage."), color),
        AttackOutcome::Immune => {
            out.say(format!("{desc} but does no damage."), color);
            out.say(format!("The {} is immune.", defender.name), color);
        }
        AttackOutcome::Evaded(Impairment::Fear) => out.say(
            format!("The {} missed as the fear blocked its attack.", attacker.name),
            color,
        ),
        AttackOutcome::Evaded(Impairment::Blindness) => out.say(
            format!("The {} missed as it's unable to see.", attacker.name),
            color,
        ),
    }
}

/// Ranged shot with no target cell.
pub fn miss_into_void(ctx: &mut TurnContext<'_>, attacker: EntityId) {
    let projectile = ctx
        .state
        .actor(attacker)
        .map(|a| a.projectile_name(ctx.items))
        .unwrap_or_else(|| "projectile".to_owned());
    ctx.out.say(
        format!("You hear the {projectile} hit a wall in the distance."),
        ColorTag::Text,
    );
}
