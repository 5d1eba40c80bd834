use arrayvec::ArrayVec;

use crate::env::ItemOracle;
use crate::event::{ColorTag, TurnEvent, TurnOutput};
use crate::state::{ActorState, ConditionKind, EntityId, GameState};

/// Result of trying to afflict a target with one condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplyResult {
    Applied,
    Resisted,
    AlreadyAfflicted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionOutcome {
    pub kind: ConditionKind,
    pub result: ApplyResult,
}

/// Applies every condition `attacker` inflicts on hit to `defender`, in
/// enumeration order.
///
/// An active condition is never refreshed here, so repeated hits cannot keep
/// resetting its counter.
pub fn apply_on_hit_conditions(
    state: &mut GameState,
    items: &dyn ItemOracle,
    attacker: EntityId,
    defender: EntityId,
    out: &mut TurnOutput,
) -> ArrayVec<ConditionOutcome, { ConditionKind::COUNT }> {
    let mut outcomes = ArrayVec::new();
    let Some(source) = state.actor(attacker) else {
        return outcomes;
    };
    let kinds = source.effective_inflicts(items);

    for kind in kinds {
        let result = apply_condition(state, attacker, defender, kind, false, out);
        outcomes.push(ConditionOutcome { kind, result });
    }
    outcomes
}

/// Tries to afflict `target` with `kind`.
///
/// With `refresh`, an already active condition restarts its counter (spells);
/// otherwise it is left alone and reported as `AlreadyAfflicted`.
pub fn apply_condition(
    state: &mut GameState,
    source: EntityId,
    target: EntityId,
    kind: ConditionKind,
    refresh: bool,
    out: &mut TurnOutput,
) -> ApplyResult {
    let Some(actor) = state.actor_mut(target).filter(|a| a.alive) else {
        return ApplyResult::Resisted;
    };

    let result = if actor.conditions.is_afflicted(kind) && !refresh {
        ApplyResult::AlreadyAfflicted
    } else if actor.conditions.is_immune(kind) {
        ApplyResult::Resisted
    } else {
        actor.conditions.afflict(kind);
        if kind == ConditionKind::Grab {
            actor.holds.grabbed_by = Some(source);
        }
        ApplyResult::Applied
    };

    match result {
        ApplyResult::Applied => out.say(applied_message(actor, kind), ColorTag::StatusEffect),
        ApplyResult::Resisted => out.say(resisted_message(actor, kind), ColorTag::StatusEffect),
        ApplyResult::AlreadyAfflicted => {}
    }
    tracing::debug!(
        target: "core::status",
        source = %source,
        target = %target,
        kind = %kind,
        result = ?result,
        "condition evaluated"
    );
    out.emit(TurnEvent::ConditionInflicted {
        source,
        target,
        kind,
        result,
    });
    result
}

/// Clears every curable condition on `target`; returns how many were cleared.
pub fn cure(state: &mut GameState, target: EntityId, out: &mut TurnOutput) -> usize {
    let Some(actor) = state.actor_mut(target) else {
        return 0;
    };
    let cured: Vec<ConditionKind> = actor
        .conditions
        .afflictions()
        .filter(|kind| kind.is_curable())
        .collect();
    for kind in &cured {
        actor.conditions.clear(*kind);
        out.emit(TurnEvent::ConditionCleared {
            actor: target,
            kind: *kind,
        });
    }
    cured.len()
}

fn applied_message(target: &ActorState, kind: ConditionKind) -> String {
    let (player, other) = match kind {
        ConditionKind::Bleed => ("You start bleeding!", "starts bleeding"),
        ConditionKind::Poison => ("You are poisoned!", "is poisoned"),
        ConditionKind::Stun => ("You are stunned!", "is stunned"),
        ConditionKind::Confusion => ("You are confused!", "is confused"),
        ConditionKind::Grab => ("You have been grabbed!", "is grabbed"),
        ConditionKind::Condemnation => ("You have been condemned!", "is condemned"),
        ConditionKind::Petrification => ("Your body starts turning to stone!", "starts turning to stone"),
        ConditionKind::Fear => ("You are terrified!", "is terrified"),
        ConditionKind::Charm => ("You are charmed!", "is charmed"),
        ConditionKind::Blindness => ("You are blinded!", "is blinded"),
        ConditionKind::Rage => ("You fly into a rage!", "flies into a rage"),
    };
    if target.is_player() {
        player.to_owned()
    } else {
        format!("The {} {other}!", target.name)
    }
}

fn resisted_message(target: &ActorState, kind: ConditionKind) -> String {
    if target.is_player() {
        format!("You resist the {kind}.")
    } else {
        format!("The {} resists the {kind}.", target.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemDefinition;
    use crate::state::{ItemHandle, Position};

    struct NoItems;

    impl ItemOracle for NoItems {
        fn definition(&self, _handle: ItemHandle) -> Option<ItemDefinition> {
            None
        }

        fn all_definitions(&self) -> Vec<ItemDefinition> {
            Vec::new()
        }
    }

    fn duel(attacker: ActorState, defender: ActorState) -> GameState {
        let mut state = GameState::new(0);
        state.spawn(attacker);
        state.spawn(defender);
        state
    }

    fn orc() -> ActorState {
        ActorState::new(EntityId(1), "orc", Position::new(1, 0), 10)
    }

    fn player() -> ActorState {
        ActorState::new(EntityId::PLAYER, "player", Position::new(0, 0), 10)
    }

    #[test]
    fn poison_applies_to_unprotected_target() {
        let mut attacker = orc();
        attacker.conditions.set_inflicts(ConditionKind::Poison, true);
        let mut state = duel(attacker, player());
        let mut out = TurnOutput::new();

        let outcomes =
            apply_on_hit_conditions(&mut state, &NoItems, EntityId(1), EntityId::PLAYER, &mut out);

        assert_eq!(
            outcomes.as_slice(),
            &[ConditionOutcome {
                kind: ConditionKind::Poison,
                result: ApplyResult::Applied
            }]
        );
        let target = state.player().unwrap();
        assert!(target.is_afflicted(ConditionKind::Poison));
        assert_eq!(target.conditions.turns_elapsed(ConditionKind::Poison), 0);
        assert!(out.has_message("You are poisoned!"));
    }

    #[test]
    fn immune_target_resists() {
        let mut attacker = orc();
        attacker.conditions.set_inflicts(ConditionKind::Stun, true);
        let mut defender = player();
        defender.conditions.set_immune(ConditionKind::Stun, true);
        let mut state = duel(attacker, defender);
        let mut out = TurnOutput::new();

        let outcomes =
            apply_on_hit_conditions(&mut state, &NoItems, EntityId(1), EntityId::PLAYER, &mut out);

        assert_eq!(outcomes[0].result, ApplyResult::Resisted);
        assert!(!state.player().unwrap().is_afflicted(ConditionKind::Stun));
    }

    #[test]
    fn second_application_does_not_refresh() {
        let mut attacker = orc();
        attacker.conditions.set_inflicts(ConditionKind::Bleed, true);
        let mut state = duel(attacker, player());
        let mut out = TurnOutput::new();

        let first =
            apply_on_hit_conditions(&mut state, &NoItems, EntityId(1), EntityId::PLAYER, &mut out);
        state
            .actor_mut(EntityId::PLAYER)
            .unwrap()
            .conditions
            .advance(ConditionKind::Bleed);
        let second =
            apply_on_hit_conditions(&mut state, &NoItems, EntityId(1), EntityId::PLAYER, &mut out);

        assert_eq!(first[0].result, ApplyResult::Applied);
        assert_eq!(second[0].result, ApplyResult::AlreadyAfflicted);
        let target = state.player().unwrap();
        assert_eq!(target.conditions.turns_elapsed(ConditionKind::Bleed), 1);
    }

    #[test]
    fn outcomes_follow_enumeration_order() {
        let mut attacker = orc();
        for kind in [ConditionKind::Rage, ConditionKind::Grab, ConditionKind::Bleed] {
            attacker.conditions.set_inflicts(kind, true);
        }
        let mut state = duel(attacker, player());
        let mut out = TurnOutput::new();

        let outcomes =
            apply_on_hit_conditions(&mut state, &NoItems, EntityId(1), EntityId::PLAYER, &mut out);
        let kinds: Vec<_> = outcomes.iter().map(|o| o.kind).collect();

        assert_eq!(
            kinds,
            vec![ConditionKind::Bleed, ConditionKind::Grab, ConditionKind::Rage]
        );
        assert_eq!(state.player().unwrap().holds.grabbed_by, Some(EntityId(1)));
    }

    #[test]
    fn cure_clears_only_curable_conditions() {
        let mut defender = player();
        defender.conditions.afflict(ConditionKind::Poison);
        defender.conditions.afflict(ConditionKind::Petrification);
        defender.conditions.afflict(ConditionKind::Stun);
        let mut state = duel(orc(), defender);
        let mut out = TurnOutput::new();

        assert_eq!(cure(&mut state, EntityId::PLAYER, &mut out), 2);
        let target = state.player().unwrap();
        assert!(!target.is_afflicted(ConditionKind::Poison));
        assert!(!target.is_afflicted(ConditionKind::Petrification));
        assert!(target.is_afflicted(ConditionKind::Stun));
    }
}
