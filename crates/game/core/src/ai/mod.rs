//! Monster decision layer.
//!
//! Every monster archetype shares one decision procedure parameterized by an
//! [`AiBehavior`]: a target-selection policy and an attack policy. The layer
//! only produces an [`Intent`]; conditions are applied later by the turn
//! resolver, so a blind monster simply bumps toward its target and lets the
//! resolver scramble the direction.
//!
//! ```text
//! decide()
//!   ├─ not visible to the player → Wait
//!   ├─ charmed → closest other monster in radius, else Wait
//!   ├─ policy target in attack range → Melee / Special / Ranged
//!   ├─ blind → bump straight toward the target
//!   └─ path step toward the target (reversed when afraid), else Wait
//! ```

use crate::action::{Action, Direction, Intent};
use crate::config::GameConfig;
use crate::env::{MapOracle, Pathfinder};
use crate::state::{ActorState, ConditionKind, EntityId, GameState};

/// Who a monster goes after.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TargetPolicy {
    /// Closest living actor of an opposing faction.
    #[default]
    ClosestHostile,
    /// Closest living actor, whatever its faction.
    ClosestAny,
    Player,
}

/// How a monster attacks once in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AttackPolicy {
    #[default]
    Melee,
    /// Shoots from up to `ranged_ai_range` cells along a row or column.
    Ranged,
    /// Adjacent special attacks, melee while nothing is recharged.
    Special,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiBehavior {
    pub targeting: TargetPolicy,
    pub attack: AttackPolicy,
}

impl AiBehavior {
    pub const fn new(targeting: TargetPolicy, attack: AttackPolicy) -> Self {
        Self { targeting, attack }
    }

    pub const fn hostile_melee() -> Self {
        Self::new(TargetPolicy::ClosestHostile, AttackPolicy::Melee)
    }

    pub const fn hostile_ranged() -> Self {
        Self::new(TargetPolicy::ClosestHostile, AttackPolicy::Ranged)
    }

    pub const fn special() -> Self {
        Self::new(TargetPolicy::Player, AttackPolicy::Special)
    }

    fn in_range(&self, me: &ActorState, target: &ActorState, config: &GameConfig) -> bool {
        let distance = me.position.chebyshev(target.position);
        match self.attack {
            AttackPolicy::Melee | AttackPolicy::Special => distance <= 1,
            AttackPolicy::Ranged => {
                distance <= config.ranged_ai_range && me.position.is_axis_aligned(target.position)
            }
        }
    }

    fn attack(&self, me: &ActorState, target: &ActorState) -> Option<Action> {
        match self.attack {
            AttackPolicy::Melee => {
                Direction::toward(me.position, target.position).map(Action::Melee)
            }
            AttackPolicy::Special => {
                Direction::toward(me.position, target.position).map(Action::Special)
            }
            AttackPolicy::Ranged => Some(Action::Ranged {
                target: Some(target.position),
            }),
        }
    }
}

/// Read-only view a monster decides from.
pub struct AiContext<'a> {
    pub state: &'a GameState,
    pub map: &'a dyn MapOracle,
    pub config: &'a GameConfig,
    pub pathfinder: &'a dyn Pathfinder,
}

impl<'a> AiContext<'a> {
    pub fn new(
        state: &'a GameState,
        map: &'a dyn MapOracle,
        config: &'a GameConfig,
        pathfinder: &'a dyn Pathfinder,
    ) -> Self {
        Self {
            state,
            map,
            config,
            pathfinder,
        }
    }

    fn closest<'s>(
        &'s self,
        me: &ActorState,
        filter: impl Fn(&ActorState) -> bool,
    ) -> Option<&'s ActorState> {
        self.state
            .living_actors()
            .filter(|other| other.id != me.id && filter(other))
            .min_by_key(|other| other.position.distance_sq(me.position))
    }

    fn policy_target(&self, me: &ActorState, policy: TargetPolicy) -> Option<&ActorState> {
        match policy {
            TargetPolicy::Player => self.state.player().filter(|p| p.alive),
            TargetPolicy::ClosestHostile => self.closest(me, |other| me.is_hostile_to(other)),
            TargetPolicy::ClosestAny => self.closest(me, |_| true),
        }
    }

    /// One step toward `target`, reversed when `me` is afraid.
    fn approach(&self, me: &ActorState, target: &ActorState) -> Intent {
        if me.is_afflicted(ConditionKind::Blindness) {
            return match Direction::toward(me.position, target.position) {
                Some(direction) => Intent::Bump(direction),
                None => Intent::Act(Action::Wait),
            };
        }

        let step = self
            .pathfinder
            .next_step(self.map, self.state, me.position, target.position)
            .and_then(|next| Direction::toward(me.position, next));
        match step {
            Some(direction) if me.is_afflicted(ConditionKind::Fear) => {
                Intent::Act(Action::Move(direction.reversed()))
            }
            Some(direction) => Intent::Act(Action::Move(direction)),
            None => Intent::Act(Action::Wait),
        }
    }
}

/// Picks the intent of monster `actor_id` for this turn.
///
/// Actors without a behavior, dead actors and monsters outside the player's
/// view wait.
pub fn decide(ctx: &AiContext<'_>, actor_id: EntityId) -> Intent {
    let wait = Intent::Act(Action::Wait);
    let Some(me) = ctx.state.actor(actor_id).filter(|a| a.alive) else {
        return wait;
    };
    let Some(behavior) = me.ai else {
        return wait;
    };
    if !ctx.map.is_visible(me.position) {
        return wait;
    }

    if me.is_afflicted(ConditionKind::Charm) {
        let radius = ctx.config.charm_search_radius.saturating_mul(ctx.config.charm_search_radius);
        let victim = ctx.closest(me, |other| {
            !other.is_player() && other.position.distance_sq(me.position) <= radius
        });
        let intent = match victim {
            Some(victim) if me.position.chebyshev(victim.position) <= 1 => {
                Direction::toward(me.position, victim.position)
                    .map_or(wait, |d| Intent::Act(Action::Melee(d)))
            }
            Some(victim) => ctx.approach(me, victim),
            None => wait,
        };
        tracing::trace!(target: "core::ai", actor = %actor_id, ?intent, "charmed");
        return intent;
    }

    let Some(target) = ctx.policy_target(me, behavior.targeting) else {
        return wait;
    };

    let intent = if behavior.in_range(me, target, ctx.config) {
        behavior.attack(me, target).map_or(wait, Intent::Act)
    } else {
        ctx.approach(me, target)
    };
    tracing::trace!(target: "core::ai", actor = %actor_id, target = %target.id, ?intent, "decided");
    intent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{DijkstraPathfinder, MapDimensions};
    use crate::state::{Faction, Position};

    struct Room {
        hidden: Vec<Position>,
    }

    impl MapOracle for Room {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(10, 10)
        }

        fn is_walkable(&self, _position: Position) -> bool {
            true
        }

        fn is_visible(&self, position: Position) -> bool {
            !self.hidden.contains(&position)
        }
    }

    fn scene(monster: ActorState) -> GameState {
        let mut state = GameState::new(0);
        state.spawn(ActorState::new(EntityId::PLAYER, "player", Position::new(2, 2), 30));
        state.spawn(monster);
        state
    }

    fn decide_in(state: &GameState, map: &Room, actor: EntityId) -> Intent {
        let config = GameConfig::default();
        let pathfinder = DijkstraPathfinder::default();
        decide(&AiContext::new(state, map, &config, &pathfinder), actor)
    }

    fn orc_at(x: i32, y: i32, behavior: AiBehavior) -> ActorState {
        ActorState::new(EntityId(1), "orc", Position::new(x, y), 10).with_ai(behavior)
    }

    #[test]
    fn adjacent_melee_monster_attacks() {
        let state = scene(orc_at(3, 2, AiBehavior::hostile_melee()));
        let intent = decide_in(&state, &Room { hidden: vec![] }, EntityId(1));
        assert_eq!(intent, Intent::Act(Action::Melee(Direction::West)));
    }

    #[test]
    fn distant_monster_paths_toward_target() {
        let state = scene(orc_at(6, 2, AiBehavior::hostile_melee()));
        let intent = decide_in(&state, &Room { hidden: vec![] }, EntityId(1));
        assert_eq!(intent, Intent::Act(Action::Move(Direction::West)));
    }

    #[test]
    fn afraid_monster_flees() {
        let mut orc = orc_at(6, 2, AiBehavior::hostile_melee());
        orc.conditions.afflict(ConditionKind::Fear);
        let state = scene(orc);
        let intent = decide_in(&state, &Room { hidden: vec![] }, EntityId(1));
        assert_eq!(intent, Intent::Act(Action::Move(Direction::East)));
    }

    #[test]
    fn ranged_monster_needs_a_straight_line() {
        let state = scene(orc_at(5, 2, AiBehavior::hostile_ranged()));
        let intent = decide_in(&state, &Room { hidden: vec![] }, EntityId(1));
        assert_eq!(
            intent,
            Intent::Act(Action::Ranged {
                target: Some(Position::new(2, 2))
            })
        );

        let state = scene(orc_at(4, 4, AiBehavior::hostile_ranged()));
        let intent = decide_in(&state, &Room { hidden: vec![] }, EntityId(1));
        assert!(matches!(intent, Intent::Act(Action::Move(_))));
    }

    #[test]
    fn hidden_monster_waits() {
        let state = scene(orc_at(3, 2, AiBehavior::hostile_melee()));
        let map = Room {
            hidden: vec![Position::new(3, 2)],
        };
        assert_eq!(decide_in(&state, &map, EntityId(1)), Intent::Act(Action::Wait));
    }

    #[test]
    fn charmed_monster_turns_on_its_own() {
        let mut orc = orc_at(3, 2, AiBehavior::hostile_melee());
        orc.conditions.afflict(ConditionKind::Charm);
        let mut state = scene(orc);
        state.spawn(
            ActorState::new(EntityId(2), "goblin", Position::new(4, 3), 5)
                .with_faction(Faction::Monster),
        );
        let intent = decide_in(&state, &Room { hidden: vec![] }, EntityId(1));
        assert_eq!(intent, Intent::Act(Action::Melee(Direction::SouthEast)));
    }

    #[test]
    fn blind_monster_bumps_toward_target() {
        let mut orc = orc_at(6, 2, AiBehavior::hostile_melee());
        orc.conditions.afflict(ConditionKind::Blindness);
        let state = scene(orc);
        let intent = decide_in(&state, &Room { hidden: vec![] }, EntityId(1));
        assert_eq!(intent, Intent::Bump(Direction::West));
    }
}
