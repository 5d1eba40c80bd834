//! Property tests for HP bounds and death bookkeeping.
//!
//! - HP never leaves `0..=maximum`, whatever the attack or condition mix
//! - an actor is alive exactly while its HP is positive
//! - a committed turn always advances the nonce by one

mod common;

use common::{World, monster, player_at, state_with};
use crawler_core::{
    AffinityProfile, ConditionKind, Direction, ElementKind, EntityId, GameEngine, Intent,
    MessageLog,
};
use proptest::prelude::*;

fn arb_condition() -> impl Strategy<Value = ConditionKind> {
    prop::sample::select(ConditionKind::ALL.to_vec())
}

fn arb_affinity() -> impl Strategy<Value = AffinityProfile> {
    (0usize..4, prop::sample::select(ElementKind::ALL.to_vec())).prop_map(|(flag, element)| {
        match flag {
            0 => AffinityProfile::new(),
            1 => AffinityProfile::new().resistant_to(element),
            2 => AffinityProfile::new().immune_to(element),
            _ => AffinityProfile::new().vulnerable_to(element),
        }
    })
}

proptest! {
    #[test]
    fn melee_keeps_hp_in_bounds(
        power in 0u32..60,
        defense in 0u32..30,
        max_hp in 1u32..50,
        roll in 1u32..=100,
        profile in arb_affinity(),
        element in prop::sample::select(ElementKind::ALL.to_vec()),
        conditions in prop::collection::vec(arb_condition(), 0..4),
    ) {
        let world = World::new().rolling(roll);
        let mut player = player_at(2, 2)
            .with_stats(power, 0)
            .with_affinity(AffinityProfile::new().attacking_with(element));
        for kind in &conditions {
            player.conditions.afflict(*kind);
        }
        let orc = monster(1, "orc", 3, 2, max_hp)
            .with_stats(0, defense)
            .with_affinity(profile);
        let mut state = state_with([player, orc]);
        let mut log = MessageLog::new();

        let result = GameEngine::new(&mut state).execute_turn(
            world.env(),
            EntityId::PLAYER,
            Intent::Bump(Direction::East),
            &mut log,
        );

        if result.is_ok() {
            prop_assert_eq!(state.turn.nonce, 1);
        } else {
            prop_assert_eq!(state.turn.nonce, 0);
        }
        for actor in &state.actors {
            prop_assert!(actor.hp.current <= actor.hp.maximum);
            prop_assert_eq!(actor.alive, actor.hp.current > 0);
        }
    }

    #[test]
    fn repeated_waits_never_break_bounds(
        max_hp in 1u32..20,
        conditions in prop::collection::vec(arb_condition(), 0..6),
        turns in 1usize..30,
    ) {
        let world = World::new();
        let mut player = player_at(2, 2);
        player.hp.maximum = max_hp;
        player.hp.current = max_hp;
        for kind in &conditions {
            player.conditions.afflict(*kind);
        }
        let mut state = state_with([player]);
        let mut log = MessageLog::new();

        for _ in 0..turns {
            if !state.player().is_some_and(|p| p.alive) {
                break;
            }
            let _ = GameEngine::new(&mut state).execute_turn(
                world.env(),
                EntityId::PLAYER,
                Intent::Bump(Direction::South),
                &mut log,
            );
            let player = state.player().unwrap();
            prop_assert!(player.hp.current <= player.hp.maximum);
            prop_assert_eq!(player.alive, player.hp.current > 0);
        }
    }
}
