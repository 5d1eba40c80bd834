//! Turn state machine.
//!
//! [`plan_turn`] reads the acting entity's conditions and turns its
//! [`Intent`] into exactly one [`Resolution`]: a concrete action to perform,
//! or a consumed turn. Gates are evaluated in priority order:
//!
//! 1. a damage-over-time tick (or death during the tick) consumes the turn
//! 2. confusion substitutes a bump in a random direction
//! 3. stun forces a wait
//! 4. condemnation or petrification consume the turn while they count down
//! 5. blindness randomizes directional intents (non-player unless configured)
//!
//! The first active gate wins; expired gates clear and fall through. The
//! resulting action then passes the charm, grab and swallow filters.
//!
//! Planning never mutates state. Counter changes are returned as
//! [`ConditionUpdate`]s that the engine applies before performing the action.

use crate::config::GameConfig;
use crate::env::Dice;
use crate::state::{ActorState, ConditionKind, EntityId, GameState};
use crate::status::TickReport;

use super::error::{ActionError, Impossible};
use super::types::{Action, Direction, Intent};

/// Conditions that run out in the background while they are active.
const LINGERING: [ConditionKind; 4] = [
    ConditionKind::Fear,
    ConditionKind::Charm,
    ConditionKind::Blindness,
    ConditionKind::Rage,
];

/// Counter change produced while planning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionUpdate {
    Advance(ConditionKind),
    Clear(ConditionKind),
}

/// Why a turn passed without an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Blocker {
    DamageTick,
    Dead,
    Stunned,
    /// Condemnation or petrification counting down.
    Doomed(ConditionKind),
    Grabbed,
    Ingested,
}

/// Final decision for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// Perform `action`. `cause` names the condition that substituted it.
    Perform {
        action: Action,
        cause: Option<ConditionKind>,
    },
    Consumed(Blocker),
}

impl Resolution {
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::Perform { action, .. } => Some(*action),
            Self::Consumed(_) => None,
        }
    }

    /// True when a condition replaced the intended action.
    pub fn is_substituted(&self) -> bool {
        matches!(self, Self::Perform { cause: Some(_), .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnPlan {
    pub updates: Vec<ConditionUpdate>,
    pub resolution: Resolution,
}

impl TurnPlan {
    fn consumed(updates: Vec<ConditionUpdate>, blocker: Blocker) -> Self {
        Self {
            updates,
            resolution: Resolution::Consumed(blocker),
        }
    }

    /// Applies the counter changes to `actor`.
    ///
    /// Clearing grab also drops the link to the grabber.
    pub fn apply_updates(&self, actor: &mut ActorState) {
        for update in &self.updates {
            match *update {
                ConditionUpdate::Advance(kind) => actor.conditions.advance(kind),
                ConditionUpdate::Clear(kind) => {
                    actor.conditions.clear(kind);
                    if kind == ConditionKind::Grab {
                        actor.holds.grabbed_by = None;
                    }
                }
            }
        }
    }
}

/// Plans the turn of `actor_id`.
///
/// `tick` is the report of the start-of-turn condition tick, which has
/// already run. Random directions are drawn from `dice`.
///
/// # Errors
///
/// `Impossible` when the player asks to move while grabbed or swallowed.
/// Substituted actions never fail here; they resolve to a consumed turn.
pub fn plan_turn(
    state: &GameState,
    actor_id: EntityId,
    intent: Intent,
    tick: TickReport,
    config: &GameConfig,
    dice: &mut Dice<'_>,
) -> Result<TurnPlan, ActionError> {
    let actor = state.actor(actor_id).ok_or(ActionError::ActorNotFound)?;
    let mut updates = Vec::new();

    if tick.died || !actor.alive {
        return Ok(TurnPlan::consumed(updates, Blocker::Dead));
    }
    if tick.damage_ticked {
        return Ok(TurnPlan::consumed(updates, Blocker::DamageTick));
    }

    let mut lingering_active = [false; LINGERING.len()];
    for (active, kind) in lingering_active.iter_mut().zip(LINGERING) {
        *active = gate(actor, kind, &mut updates);
    }
    let charmed = lingering_active[1];
    let blind = lingering_active[2];

    let substitute = if gate(actor, ConditionKind::Confusion, &mut updates) {
        let direction = random_direction(dice);
        Some((bump(state, actor, direction), ConditionKind::Confusion))
    } else if gate(actor, ConditionKind::Stun, &mut updates) {
        return Ok(TurnPlan::consumed(updates, Blocker::Stunned));
    } else if let Some(kind) = doom(actor) {
        return Ok(TurnPlan::consumed(updates, Blocker::Doomed(kind)));
    } else if blind
        && intent.is_directional()
        && (!actor.is_player() || config.blindness_affects_player)
    {
        let direction = random_direction(dice);
        Some((bump(state, actor, direction), ConditionKind::Blindness))
    } else {
        None
    };

    let substituted = substitute.is_some();
    let (mut action, mut cause) = match substitute {
        Some((action, cause)) => (action, Some(cause)),
        None => (resolve_intent(state, actor, intent), None),
    };

    if charmed && actor.is_player() && strikes_actor(state, actor, action) {
        action = Action::Wait;
        cause = Some(ConditionKind::Charm);
    }

    if matches!(action, Action::Move(_)) {
        if actor.is_afflicted(ConditionKind::Grab) {
            if actor.is_player() {
                if substituted {
                    return Ok(TurnPlan::consumed(updates, Blocker::Grabbed));
                }
                return Err(Impossible::Grabbed.into());
            }
            if actor.conditions.turns_elapsed(ConditionKind::Grab) > ConditionKind::Grab.threshold()
            {
                updates.push(ConditionUpdate::Clear(ConditionKind::Grab));
            } else {
                updates.push(ConditionUpdate::Advance(ConditionKind::Grab));
                return Ok(TurnPlan::consumed(updates, Blocker::Grabbed));
            }
        }
        if actor.holds.ingested_by.is_some() {
            if actor.is_player() && !substituted {
                return Err(Impossible::Ingested.into());
            }
            return Ok(TurnPlan::consumed(updates, Blocker::Ingested));
        }
    }

    Ok(TurnPlan {
        updates,
        resolution: Resolution::Perform { action, cause },
    })
}

/// Concrete action for an intent without any override.
pub fn resolve_intent(state: &GameState, actor: &ActorState, intent: Intent) -> Action {
    match intent {
        Intent::Bump(direction) => bump(state, actor, direction),
        Intent::Act(action) => action,
    }
}

/// Melee when a living actor stands in the cell, chest interaction for the
/// player when a chest does, movement otherwise.
pub fn bump(state: &GameState, actor: &ActorState, direction: Direction) -> Action {
    let destination = direction.apply(actor.position);
    if state
        .actor_at(destination)
        .is_some_and(|other| other.id != actor.id)
    {
        Action::Melee(direction)
    } else if actor.is_player() && state.chest_at(destination).is_some() {
        Action::Chest(direction)
    } else {
        Action::Move(direction)
    }
}

/// Evaluates a self-expiring condition. Returns true while it is active,
/// recording an advance; an expired condition is cleared and reported
/// inactive.
fn gate(actor: &ActorState, kind: ConditionKind, updates: &mut Vec<ConditionUpdate>) -> bool {
    if !actor.is_afflicted(kind) {
        return false;
    }
    if actor.conditions.is_expired(kind) {
        updates.push(ConditionUpdate::Clear(kind));
        false
    } else {
        updates.push(ConditionUpdate::Advance(kind));
        true
    }
}

fn doom(actor: &ActorState) -> Option<ConditionKind> {
    [ConditionKind::Condemnation, ConditionKind::Petrification]
        .into_iter()
        .find(|kind| actor.is_afflicted(*kind))
}

fn random_direction(dice: &mut Dice<'_>) -> Direction {
    let index = dice.below(Direction::ALL.len() as u32) as usize;
    Direction::ALL[index % Direction::ALL.len()]
}

/// True when `action` would hit another living actor.
fn strikes_actor(state: &GameState, actor: &ActorState, action: Action) -> bool {
    let cell = match action {
        Action::Melee(direction) | Action::Special(direction) => direction.apply(actor.position),
        Action::Ranged {
            target: Some(cell),
        } => cell,
        _ => return false,
    };
    state
        .actor_at(cell)
        .is_some_and(|other| other.id != actor.id)
}
