//! Turn execution pipeline.
//!
//! The [`GameEngine`] is the only entry point that mutates [`GameState`] for
//! a whole turn. One call resolves one actor's turn to completion:
//!
//! 1. swallowed players are digested by their holders
//! 2. damage-over-time and fatal-on-expiry conditions tick
//! 3. the resolver plans the turn from the actor's conditions
//! 4. counter updates apply and the planned action is performed
//!
//! Turns are transactional. A rejected player action restores the pre-turn
//! snapshot, so state, nonce and message sink are untouched. Substituted and
//! monster actions never reject: an `Impossible` there falls back to a wait.

mod errors;

pub use errors::TurnError;

use crate::action::{
    Action, ActionError, Blocker, ConditionUpdate, Intent, Resolution, TurnContext, perform,
    plan_turn,
};
use crate::ai::{AiContext, decide};
use crate::env::{Env, FloorLifecycle, Pathfinder};
use crate::error::ErrorContext;
use crate::event::{ColorTag, MessageSink, TurnEvent, TurnOutput};
use crate::state::{ConditionKind, EntityId, GameState, SpecialAttackKind};
use crate::status::{TickReport, tick_passive_conditions};

/// Result of one committed turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub actor: EntityId,
    pub resolution: Resolution,
    pub events: Vec<TurnEvent>,
}

impl TurnOutcome {
    /// True when the actor performed `action` this turn.
    pub fn performed(&self, action: Action) -> bool {
        self.resolution.action() == Some(action)
    }
}

/// Game engine that resolves turns against a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    floors: Option<&'a mut dyn FloorLifecycle>,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self {
            state,
            floors: None,
        }
    }

    /// Attaches the collaborator that rebuilds the floor after descending.
    pub fn with_floors(mut self, floors: &'a mut dyn FloorLifecycle) -> Self {
        self.floors = Some(floors);
        self
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves one turn of `actor` with the given intent.
    ///
    /// Narrative is written to `sink` only when the turn commits; the turn
    /// nonce advances at the same time.
    ///
    /// # Errors
    ///
    /// Returns a [`TurnError`] when the actor is unknown or dead, an oracle
    /// is missing, or the player's own action is `Impossible`. The state is
    /// left exactly as it was.
    pub fn execute_turn(
        &mut self,
        env: Env<'_>,
        actor: EntityId,
        intent: Intent,
        sink: &mut dyn MessageSink,
    ) -> Result<TurnOutcome, TurnError> {
        let nonce = self.state.turn.nonce;
        let snapshot = self.state.clone();

        let (resolution, out) = match run_turn(self.state, env, actor, intent) {
            Ok(done) => done,
            Err(kind) => {
                *self.state = snapshot;
                let mut context = ErrorContext::new(nonce).with_actor(actor);
                if let Some(position) = self.state.actor(actor).map(|a| a.position) {
                    context = context.with_position(position);
                }
                tracing::debug!(target: "core::turn", actor = %actor, error = %kind, "turn rejected");
                return Err(TurnError::new(kind, context));
            }
        };

        self.state.turn.nonce += 1;
        if resolution.action() == Some(Action::TakeStairs) {
            let depth = self.state.world.depth;
            if let Some(floors) = self.floors.as_mut() {
                floors.regenerate_floor(self.state, depth);
            }
        }

        let events = out.flush_into(sink);
        Ok(TurnOutcome {
            actor,
            resolution,
            events,
        })
    }

    /// Lets the AI of `actor` pick an intent, then resolves the turn.
    pub fn run_npc_turn(
        &mut self,
        env: Env<'_>,
        actor: EntityId,
        pathfinder: &dyn Pathfinder,
        sink: &mut dyn MessageSink,
    ) -> Result<TurnOutcome, TurnError> {
        let context = || ErrorContext::new(self.state.turn.nonce).with_actor(actor);
        let map = env
            .map()
            .map_err(|err| TurnError::new(err.into(), context()))?;
        let config = env
            .config()
            .map_err(|err| TurnError::new(err.into(), context()))?;

        let intent = decide(&AiContext::new(self.state, map, config, pathfinder), actor);
        self.execute_turn(env, actor, intent, sink)
    }

    /// Runs one turn for every living monster with a behavior, in spawn
    /// order. Stops early when the player dies.
    pub fn run_npc_turns(
        &mut self,
        env: Env<'_>,
        pathfinder: &dyn Pathfinder,
        sink: &mut dyn MessageSink,
    ) -> Result<Vec<TurnOutcome>, TurnError> {
        let monsters: Vec<EntityId> = self
            .state
            .living_actors()
            .filter(|a| !a.is_player() && a.ai.is_some())
            .map(|a| a.id)
            .collect();

        let mut outcomes = Vec::with_capacity(monsters.len());
        for id in monsters {
            if !self.state.player().is_some_and(|p| p.alive) {
                break;
            }
            if !self.state.actor(id).is_some_and(|a| a.alive) {
                continue;
            }
            outcomes.push(self.run_npc_turn(env, id, pathfinder, sink)?);
        }
        Ok(outcomes)
    }
}

fn run_turn(
    state: &mut GameState,
    env: Env<'_>,
    actor: EntityId,
    intent: Intent,
) -> Result<(Resolution, TurnOutput), ActionError> {
    let alive = state.actor(actor).ok_or(ActionError::ActorNotFound)?.alive;
    if !alive {
        return Err(ActionError::ActorDead);
    }

    let mut ctx = TurnContext::new(state, env, actor)?;
    if actor.is_player() {
        digest(&mut ctx);
    }
    let tick = if ctx.state.actor(actor).is_some_and(|a| a.alive) {
        tick_passive_conditions(ctx.state, actor, &mut ctx.out)
    } else {
        TickReport {
            damage_ticked: false,
            died: true,
        }
    };

    let plan = plan_turn(ctx.state, actor, intent, tick, ctx.config, &mut ctx.dice)?;
    if let Some(entity) = ctx.state.actor_mut(actor) {
        plan.apply_updates(entity);
    }
    for update in &plan.updates {
        if let ConditionUpdate::Clear(kind) = *update {
            announce_recovery(&mut ctx, kind);
        }
    }
    announce_override(&mut ctx, plan.resolution);

    let resolution = match plan.resolution {
        Resolution::Perform { action, cause } => match perform(&mut ctx, action) {
            Ok(()) => plan.resolution,
            Err(ActionError::Impossible(reason)) if cause.is_some() || !actor.is_player() => {
                tracing::warn!(
                    target: "core::turn",
                    actor = %actor,
                    ?action,
                    %reason,
                    "forced action impossible, waiting instead"
                );
                perform(&mut ctx, Action::Wait)?;
                Resolution::Perform {
                    action: Action::Wait,
                    cause,
                }
            }
            Err(err) => return Err(err),
        },
        Resolution::Consumed(_) => plan.resolution,
    };

    tracing::debug!(target: "core::turn", actor = %actor, ?resolution, "turn resolved");
    Ok((resolution, ctx.out))
}

/// Every actor swallowing the player deals its digestion damage.
fn digest(ctx: &mut TurnContext<'_>) {
    let target = ctx.actor;
    let holders: Vec<(EntityId, u32, String)> = ctx
        .state
        .living_actors()
        .filter(|a| a.holds.ingesting == Some(target))
        .map(|a| {
            let damage = a.specials.get(SpecialAttackKind::Ingest).damage;
            (a.id, damage, a.name.clone())
        })
        .collect();

    for (holder, damage, name) in holders {
        if damage == 0 {
            continue;
        }
        ctx.out.say(
            format!("The {name} digests you for {damage} hit points!"),
            ColorTag::EnemyAttack,
        );
        let dealt = ctx.state.damage_actor(target, damage, &mut ctx.out);
        ctx.out.emit(TurnEvent::IngestDamage {
            holder,
            target,
            damage: dealt,
        });
    }
}

fn announce_recovery(ctx: &mut TurnContext<'_>, kind: ConditionKind) {
    let actor = ctx.actor;
    ctx.out.emit(TurnEvent::ConditionCleared { actor, kind });
    if !actor.is_player() {
        return;
    }
    let text = match kind {
        ConditionKind::Confusion => "You are no longer confused.",
        ConditionKind::Stun => "You are no longer stunned.",
        ConditionKind::Fear => "Your fear fades away.",
        ConditionKind::Charm => "The charm wears off.",
        ConditionKind::Blindness => "You can see again.",
        ConditionKind::Rage => "Your rage subsides.",
        ConditionKind::Grab => "You break free from the grab.",
        _ => return,
    };
    ctx.out.say(text, ColorTag::StatusEffect);
}

fn announce_override(ctx: &mut TurnContext<'_>, resolution: Resolution) {
    let actor = ctx.actor;
    let (cause, player_text, other_text) = match resolution {
        Resolution::Perform {
            cause: Some(ConditionKind::Confusion),
            ..
        } => (
            ConditionKind::Confusion,
            "You stumble around in confusion.",
            "stumbles around in confusion",
        ),
        Resolution::Perform {
            cause: Some(ConditionKind::Blindness),
            ..
        } => (
            ConditionKind::Blindness,
            "You stumble around blindly.",
            "stumbles around blindly",
        ),
        Resolution::Perform {
            cause: Some(ConditionKind::Charm),
            ..
        } => (
            ConditionKind::Charm,
            "You cannot bring yourself to attack.",
            "cannot bring itself to attack",
        ),
        Resolution::Consumed(Blocker::Stunned) => {
            (ConditionKind::Stun, "You are stunned!", "is stunned")
        }
        Resolution::Consumed(Blocker::Grabbed) => (
            ConditionKind::Grab,
            "You struggle against the grab.",
            "struggles against the grab",
        ),
        Resolution::Consumed(Blocker::Doomed(kind)) => {
            ctx.out.emit(TurnEvent::ActionOverridden { actor, cause: kind });
            return;
        }
        _ => return,
    };

    let text = match ctx.state.actor(actor) {
        Some(a) if a.is_player() => player_text.to_owned(),
        Some(a) => format!("The {} {other_text}.", a.name),
        None => return,
    };
    ctx.out.say(text, ColorTag::StatusEffect);
    ctx.out.emit(TurnEvent::ActionOverridden { actor, cause });
}
