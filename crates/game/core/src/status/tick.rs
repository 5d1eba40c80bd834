use crate::event::{ColorTag, TurnEvent, TurnOutput};
use crate::state::{ConditionKind, EntityId, GameState};

/// What happened during the start-of-turn tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A bleed or poison tick dealt damage; the turn is consumed.
    pub damage_ticked: bool,
    /// The actor died during the tick.
    pub died: bool,
}

impl TickReport {
    pub fn consumes_turn(&self) -> bool {
        self.damage_ticked || self.died
    }
}

/// Advances and resolves damage-over-time and fatal-on-expiry conditions.
///
/// 1. Bleed, poison: past the threshold, deal the fixed damage and restart the
///    counter; otherwise advance it.
/// 2. Condemnation, petrification: past the threshold, the host dies whatever
///    its HP; otherwise the counter advances with a warning.
pub fn tick_passive_conditions(
    state: &mut GameState,
    actor_id: EntityId,
    out: &mut TurnOutput,
) -> TickReport {
    let mut report = TickReport::default();

    for kind in [ConditionKind::Bleed, ConditionKind::Poison] {
        let Some(actor) = state.actor_mut(actor_id).filter(|a| a.alive) else {
            report.died = true;
            return report;
        };
        if !actor.is_afflicted(kind) {
            continue;
        }
        if actor.conditions.turns_elapsed(kind) <= kind.threshold() {
            actor.conditions.advance(kind);
            continue;
        }

        let damage = kind.tick_damage().unwrap_or(0);
        actor.conditions.reset_counter(kind);
        let noun = if kind == ConditionKind::Bleed {
            "bleeding"
        } else {
            "poison"
        };
        let text = if actor.is_player() {
            format!("You receive {damage} damage from the {noun}!")
        } else {
            format!("The {} receives {damage} damage from the {noun}!", actor.name)
        };
        out.say(text, ColorTag::StatusEffect);
        out.emit(TurnEvent::DamageTick {
            actor: actor_id,
            kind,
            damage,
        });
        tracing::debug!(target: "core::status", actor = %actor_id, kind = %kind, damage, "damage tick");

        report.damage_ticked = true;
        state.damage_actor(actor_id, damage, out);
    }

    for kind in [ConditionKind::Condemnation, ConditionKind::Petrification] {
        let Some(actor) = state.actor_mut(actor_id).filter(|a| a.alive) else {
            report.died = true;
            return report;
        };
        if !actor.is_afflicted(kind) {
            continue;
        }

        if actor.conditions.is_expired(kind) {
            let text = match (kind, actor.is_player()) {
                (ConditionKind::Condemnation, true) => {
                    "The weight of your condemnation reaches you!".to_owned()
                }
                (ConditionKind::Condemnation, false) => {
                    format!("The weight of condemnation reaches the {}!", actor.name)
                }
                (_, true) => "All your body is now turned to stone!".to_owned(),
                (_, false) => format!("All of the {} is now turned to stone!", actor.name),
            };
            out.say(text, ColorTag::Warning);
            out.emit(TurnEvent::ConditionExpiredFatal {
                actor: actor_id,
                kind,
            });
            tracing::debug!(target: "core::status", actor = %actor_id, kind = %kind, "fatal expiry");
            state.kill(actor_id, out);
            report.died = true;
            return report;
        }

        actor.conditions.advance(kind);
        let turns_elapsed = actor.conditions.turns_elapsed(kind);
        let text = match (kind, actor.is_player()) {
            (ConditionKind::Condemnation, true) => "Death is soon approaching!".to_owned(),
            (ConditionKind::Condemnation, false) => {
                format!("Death is approaching the {}.", actor.name)
            }
            (_, true) => "More of your body is turning to stone!".to_owned(),
            (_, false) => format!("More of the {} is turning to stone.", actor.name),
        };
        out.say(text, ColorTag::Warning);
        out.emit(TurnEvent::ConditionWarning {
            actor: actor_id,
            kind,
            turns_elapsed,
        });
    }

    report.died = state.actor(actor_id).is_none_or(|a| !a.alive);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorState, Position};

    fn state_with(actor: ActorState) -> GameState {
        let mut state = GameState::new(0);
        state.spawn(actor);
        state
    }

    fn hero(hp: u32) -> ActorState {
        ActorState::new(EntityId::PLAYER, "player", Position::ORIGIN, hp)
    }

    #[test]
    fn bleed_past_threshold_ticks_and_resets() {
        let mut actor = hero(10);
        actor.conditions.afflict(ConditionKind::Bleed);
        actor.conditions.get_mut(ConditionKind::Bleed).turns_elapsed = 5;
        let mut state = state_with(actor);
        let mut out = TurnOutput::new();

        let report = tick_passive_conditions(&mut state, EntityId::PLAYER, &mut out);

        assert!(report.consumes_turn());
        let actor = state.player().unwrap();
        assert_eq!(actor.hp.current, 9);
        assert_eq!(actor.conditions.turns_elapsed(ConditionKind::Bleed), 0);
        assert!(actor.is_afflicted(ConditionKind::Bleed));
        assert!(out.has_message("You receive 1 damage from the bleeding!"));
    }

    #[test]
    fn poison_below_threshold_only_advances() {
        let mut actor = hero(10);
        actor.conditions.afflict(ConditionKind::Poison);
        let mut state = state_with(actor);
        let mut out = TurnOutput::new();

        let report = tick_passive_conditions(&mut state, EntityId::PLAYER, &mut out);

        assert!(!report.consumes_turn());
        let actor = state.player().unwrap();
        assert_eq!(actor.hp.current, 10);
        assert_eq!(actor.conditions.turns_elapsed(ConditionKind::Poison), 1);
        assert!(out.events.is_empty());
    }

    #[test]
    fn poison_can_kill() {
        let mut actor = hero(2);
        actor.conditions.afflict(ConditionKind::Poison);
        actor.conditions.get_mut(ConditionKind::Poison).turns_elapsed = 5;
        let mut state = state_with(actor);
        let mut out = TurnOutput::new();

        let report = tick_passive_conditions(&mut state, EntityId::PLAYER, &mut out);

        assert!(report.died);
        assert!(out.events.contains(&TurnEvent::Died {
            actor: EntityId::PLAYER
        }));
    }

    #[test]
    fn condemnation_warns_then_kills() {
        let mut actor = hero(50);
        actor.conditions.afflict(ConditionKind::Condemnation);
        let mut state = state_with(actor);
        let threshold = ConditionKind::Condemnation.threshold();

        for _ in 0..=threshold {
            let mut out = TurnOutput::new();
            let report = tick_passive_conditions(&mut state, EntityId::PLAYER, &mut out);
            assert!(!report.died);
            assert!(out.has_message("Death is soon approaching!"));
        }

        let mut out = TurnOutput::new();
        let report = tick_passive_conditions(&mut state, EntityId::PLAYER, &mut out);
        assert!(report.died);
        assert_eq!(state.player().unwrap().hp.current, 0);
        assert!(out.events.contains(&TurnEvent::ConditionExpiredFatal {
            actor: EntityId::PLAYER,
            kind: ConditionKind::Condemnation,
        }));
    }

    #[test]
    fn petrification_runs_its_own_counter() {
        let mut actor = hero(50);
        actor.conditions.afflict(ConditionKind::Petrification);
        actor.conditions.afflict(ConditionKind::Condemnation);
        let mut state = state_with(actor);

        let mut out = TurnOutput::new();
        tick_passive_conditions(&mut state, EntityId::PLAYER, &mut out);

        let actor = state.player().unwrap();
        assert_eq!(actor.conditions.turns_elapsed(ConditionKind::Petrification), 1);
        assert_eq!(actor.conditions.turns_elapsed(ConditionKind::Condemnation), 1);
    }
}
