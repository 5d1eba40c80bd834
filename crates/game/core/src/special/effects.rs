//! Ability formulas.
//!
//! Each effect performs its side effects on the target and returns the damage
//! the caller should deal.

use crate::action::TurnContext;
use crate::env::ItemDefinition;
use crate::event::{ColorTag, TurnEvent};
use crate::state::{EntityId, SpecialAbility, SpecialAttackKind};

pub(super) fn fire(
    ctx: &mut TurnContext<'_>,
    kind: SpecialAttackKind,
    ability: &SpecialAbility,
    attacker: EntityId,
    target: EntityId,
) -> u32 {
    match kind {
        SpecialAttackKind::Percentile => percentile(ctx, ability, target),
        SpecialAttackKind::StatsDrain => stats_drain(ctx, ability, target),
        SpecialAttackKind::Rot => ruin_item(ctx, ability, target, Ruin::Rot),
        SpecialAttackKind::Corrosion => ruin_item(ctx, ability, target, Ruin::Corrosion),
        SpecialAttackKind::Dispel => ruin_item(ctx, ability, target, Ruin::Dispel),
        SpecialAttackKind::Steal => steal(ctx, ability, attacker, target),
        SpecialAttackKind::Ingest => ingest(ctx, ability, attacker, target),
    }
}

/// `round(max_hp * pct / 100)`, ignoring defense.
fn percentile(ctx: &mut TurnContext<'_>, ability: &SpecialAbility, target: EntityId) -> u32 {
    let Some(victim) = ctx.state.actor(target) else {
        return 0;
    };
    if ability.amount == 0 {
        return 0;
    }
    let scaled = u64::from(victim.hp.maximum) * u64::from(ability.amount);
    let damage = u32::try_from((scaled + 50) / 100).unwrap_or(u32::MAX);
    ctx.out.say(
        format!("A vital point of {} is struck!", victim.name),
        ColorTag::Warning,
    );
    damage
}

/// Lowers base power and defense by `amount` (floored at 0) and deals the
/// flat damage. Does nothing when both stats are already 0.
fn stats_drain(ctx: &mut TurnContext<'_>, ability: &SpecialAbility, target: EntityId) -> u32 {
    let Some(victim) = ctx.state.actor_mut(target) else {
        return 0;
    };
    if victim.base_power == 0 && victim.base_defense == 0 {
        ctx.out.say(
            format!("There is no strength left to drain from {}.", victim.name),
            ColorTag::Text,
        );
        return 0;
    }
    victim.base_power = victim.base_power.saturating_sub(ability.amount);
    victim.base_defense = victim.base_defense.saturating_sub(ability.amount);
    let text = if victim.is_player() {
        "You feel your strength drained away!".to_owned()
    } else {
        format!("The strength of {} is drained away!", victim.name)
    };
    ctx.out.say(text, ColorTag::Warning);
    ability.damage
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ruin {
    Rot,
    Corrosion,
    Dispel,
}

impl Ruin {
    fn matches(self, def: &ItemDefinition) -> bool {
        match self {
            Self::Rot => !def.magical && def.material.is_organic(),
            Self::Corrosion => !def.magical && def.material.is_metallic(),
            Self::Dispel => def.magical,
        }
    }

    fn damaged_verb(self) -> &'static str {
        match self {
            Self::Rot => "starts to rot",
            Self::Corrosion => "is corroded",
            Self::Dispel => "flickers",
        }
    }

    fn destroyed_verb(self) -> &'static str {
        match self {
            Self::Rot => "rots away",
            Self::Corrosion => "corrodes away",
            Self::Dispel => "loses its magic and crumbles",
        }
    }
}

/// Damages the first matching item, or destroys it when already damaged,
/// then deals flat damage reduced by defense. Targets without any inventory
/// take double flat damage instead.
fn ruin_item(
    ctx: &mut TurnContext<'_>,
    ability: &SpecialAbility,
    target: EntityId,
    ruin: Ruin,
) -> u32 {
    let items = ctx.items;
    let Some(victim) = ctx.state.actor_mut(target) else {
        return 0;
    };
    if !victim.inventory.has_storage() {
        return ability.damage.saturating_mul(2);
    }

    if let Some(item_id) = victim.find_item(items, |def| ruin.matches(def)) {
        let name = victim
            .inventory
            .get(item_id)
            .and_then(|item| items.definition(item.handle))
            .map(|def| def.name)
            .unwrap_or_default();
        let already_damaged = victim.inventory.get(item_id).is_some_and(|i| i.damaged);

        if already_damaged {
            victim.equipment.unequip(item_id);
            victim.inventory.remove(item_id);
            ctx.out.say(
                format!("The {name} of {} {}!", victim.name, ruin.destroyed_verb()),
                ColorTag::Warning,
            );
            ctx.out.emit(TurnEvent::ItemDestroyed {
                owner: target,
                item: item_id,
            });
        } else if let Some(item) = victim.inventory.get_mut(item_id) {
            item.damaged = true;
            ctx.out.say(
                format!("The {name} of {} {}.", victim.name, ruin.damaged_verb()),
                ColorTag::Warning,
            );
            ctx.out.emit(TurnEvent::ItemDamaged {
                owner: target,
                item: item_id,
            });
        }
    }

    let defense = victim.defense(items);
    ability.damage.saturating_sub(defense)
}

/// Takes the first equippable item; empty inventories take double damage.
fn steal(
    ctx: &mut TurnContext<'_>,
    ability: &SpecialAbility,
    attacker: EntityId,
    target: EntityId,
) -> u32 {
    let items = ctx.items;
    let Some(victim) = ctx.state.actor_mut(target) else {
        return 0;
    };
    if victim.inventory.is_empty() {
        return ability.damage.saturating_mul(2);
    }

    let defense = victim.defense(items);
    let victim_name = victim.name.clone();
    let victim_position = victim.position;
    let stolen = victim
        .find_item(items, ItemDefinition::is_equippable)
        .and_then(|id| {
            victim.equipment.unequip(id);
            victim.inventory.remove(id)
        });

    if let Some(item) = stolen {
        let name = items
            .definition(item.handle)
            .map(|def| def.name)
            .unwrap_or_default();
        let kept = ctx
            .state
            .actor_mut(attacker)
            .map(|thief| thief.inventory.push(item));
        if !matches!(kept, Some(Ok(()))) {
            ctx.state.world.drop_item(victim_position, item);
        }
        ctx.out.say(
            format!("The {name} is stolen from {victim_name}!"),
            ColorTag::Warning,
        );
        ctx.out.emit(TurnEvent::ItemStolen {
            from: target,
            by: attacker,
            item: item.id,
        });
    }

    ability.damage.saturating_sub(defense)
}

/// Swallows the target when it is not already swallowed and the ability has
/// positive digestion damage.
fn ingest(
    ctx: &mut TurnContext<'_>,
    ability: &SpecialAbility,
    attacker: EntityId,
    target: EntityId,
) -> u32 {
    let Some(victim) = ctx.state.actor(target) else {
        return 0;
    };
    let holder_busy = ctx
        .state
        .actor(attacker)
        .is_some_and(|a| a.holds.ingesting.is_some());
    if victim.holds.ingested_by.is_some() || holder_busy || ability.damage == 0 {
        ctx.out.say(
            format!("{} cannot be swallowed now.", victim.display_name()),
            ColorTag::Text,
        );
        return 0;
    }

    let text = if victim.is_player() {
        "You have been swallowed!".to_owned()
    } else {
        format!("The {} has been swallowed!", victim.name)
    };
    ctx.out.say(text, ColorTag::Warning);

    if let Some(victim) = ctx.state.actor_mut(target) {
        victim.holds.ingested_by = Some(attacker);
    }
    if let Some(holder) = ctx.state.actor_mut(attacker) {
        holder.holds.ingesting = Some(target);
    }
    0
}
