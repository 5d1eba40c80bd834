mod common;

use common::{World, monster, player_at, state_with};
use crawler_core::{
    Action, AiBehavior, ConditionKind, DijkstraPathfinder, EntityId, GameConfig, GameEngine,
    MessageLog, Position,
};

fn pathfinder() -> DijkstraPathfinder {
    DijkstraPathfinder::from_config(&GameConfig::default())
}

#[test]
fn monsters_act_in_spawn_order() {
    let world = World::new();
    let mut state = state_with([
        player_at(5, 5),
        monster(1, "orc", 6, 5, 10)
            .with_stats(5, 0)
            .with_ai(AiBehavior::hostile_melee()),
        monster(2, "goblin", 9, 5, 10).with_ai(AiBehavior::hostile_melee()),
        monster(3, "statue", 1, 1, 10),
    ]);
    let mut log = MessageLog::new();

    let outcomes = GameEngine::new(&mut state)
        .run_npc_turns(world.env(), &pathfinder(), &mut log)
        .unwrap();

    let actors: Vec<EntityId> = outcomes.iter().map(|o| o.actor).collect();
    assert_eq!(actors, vec![EntityId(1), EntityId(2)]);
    assert_eq!(state.player().unwrap().hp.current, 26);
    assert!(log.contains("Orc attacks player for 4 hit points."));

    let goblin = state.actor(EntityId(2)).unwrap();
    assert_eq!(goblin.position.chebyshev(Position::new(5, 5)), 3);
    assert_eq!(state.turn.nonce, 2);
}

#[test]
fn player_death_ends_the_monster_phase() {
    let world = World::new();
    let mut player = player_at(5, 5);
    player.hp.current = 1;
    let mut state = state_with([
        player,
        monster(1, "orc", 6, 5, 10)
            .with_stats(5, 0)
            .with_ai(AiBehavior::hostile_melee()),
        monster(2, "troll", 4, 5, 10)
            .with_stats(9, 0)
            .with_ai(AiBehavior::hostile_melee()),
    ]);
    let mut log = MessageLog::new();

    let outcomes = GameEngine::new(&mut state)
        .run_npc_turns(world.env(), &pathfinder(), &mut log)
        .unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(!state.player().unwrap().alive);
    assert!(log.contains("You died!"));
    assert!(!log.contains("Troll attacks"));
}

#[test]
fn unseen_monsters_wait() {
    let mut world = World::new();
    world.map.hidden.push(Position::new(8, 8));
    let mut state = state_with([
        player_at(5, 5),
        monster(1, "orc", 8, 8, 10).with_ai(AiBehavior::hostile_melee()),
    ]);
    let mut log = MessageLog::new();

    let outcomes = GameEngine::new(&mut state)
        .run_npc_turns(world.env(), &pathfinder(), &mut log)
        .unwrap();

    assert!(outcomes[0].performed(Action::Wait));
    assert_eq!(state.actor(EntityId(1)).unwrap().position, Position::new(8, 8));
}

#[test]
fn archers_shoot_along_a_line() {
    let world = World::new();
    let mut state = state_with([
        player_at(5, 5),
        monster(1, "archer", 5, 8, 10)
            .with_stats(4, 0)
            .with_ai(AiBehavior::hostile_ranged()),
    ]);
    let mut log = MessageLog::new();

    let outcome = GameEngine::new(&mut state)
        .run_npc_turn(world.env(), EntityId(1), &pathfinder(), &mut log)
        .unwrap();

    assert!(outcome.performed(Action::Ranged {
        target: Some(Position::new(5, 5))
    }));
    assert_eq!(state.player().unwrap().hp.current, 27);
    assert!(log.contains("Archer shoots a projectile at player for 3 hit points."));
}

#[test]
fn charmed_monster_turns_on_its_allies() {
    let world = World::new();
    let mut charmed = monster(1, "orc", 6, 5, 10)
        .with_stats(5, 0)
        .with_ai(AiBehavior::hostile_melee());
    charmed.conditions.afflict(ConditionKind::Charm);
    let mut state = state_with([
        player_at(5, 5),
        charmed,
        monster(2, "goblin", 7, 5, 10),
    ]);
    let mut log = MessageLog::new();

    GameEngine::new(&mut state)
        .run_npc_turn(world.env(), EntityId(1), &pathfinder(), &mut log)
        .unwrap();

    assert!(state.player().unwrap().hp.is_full());
    assert_eq!(state.actor(EntityId(2)).unwrap().hp.current, 5);
}

#[test]
fn frightened_monster_backs_away() {
    let world = World::new();
    let mut scared = monster(1, "kobold", 7, 5, 10).with_ai(AiBehavior::hostile_melee());
    scared.conditions.afflict(ConditionKind::Fear);
    let mut state = state_with([player_at(5, 5), scared]);
    let mut log = MessageLog::new();

    GameEngine::new(&mut state)
        .run_npc_turn(world.env(), EntityId(1), &pathfinder(), &mut log)
        .unwrap();

    let kobold = state.actor(EntityId(1)).unwrap();
    assert!(kobold.position.chebyshev(Position::new(5, 5)) > 2);
}
