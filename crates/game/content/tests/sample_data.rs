//! The bundled data directory loads cleanly and drives real turns.

use std::path::PathBuf;

use crawler_content::{ContentBundle, ContentFactory, MapLayout};
use crawler_core::{
    ActionError, Direction, EntityId, Env, GameEngine, GameState, Impossible, Intent, ItemOracle,
    MapOracle, MessageLog, PcgRng, Position, SpellHandle, SpellOracle,
};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

fn first_floor() -> (ContentBundle, MapLayout, GameState) {
    let factory = factory();
    let bundle = factory.load_all().unwrap();
    let layout = factory.load_map("first_floor").unwrap();

    let mut state = GameState::new(42);
    bundle
        .actors
        .spawn_into(&mut state, "player", EntityId::PLAYER, Position::new(0, 0))
        .unwrap();
    bundle
        .actors
        .spawn_into(&mut state, "orc", EntityId(1), Position::new(2, 1))
        .unwrap();
    layout.apply(&mut state);
    (bundle, layout, state)
}

#[test]
fn bundled_content_loads() {
    let bundle = factory().load_all().unwrap();

    assert!(bundle.items.len() >= 10);
    assert!(bundle.spells.spell(SpellHandle(2)).is_some());
    assert!(bundle.actors.get("giant toad").is_some());
    assert_eq!(bundle.actors.get("orc").map(|t| t.xp_given), Some(35));
    assert!(
        bundle
            .items
            .all_definitions()
            .iter()
            .any(|def| def.name == "scroll of lightning")
    );
}

#[test]
fn bundled_floor_places_player_and_chests() {
    let (_, layout, state) = first_floor();

    assert_eq!(state.player().unwrap().position, Position::new(1, 1));
    assert_eq!(state.world.stairs, Some(Position::new(10, 4)));
    assert_eq!(state.world.chests.len(), 3);
    assert!(state.chest_at(Position::new(9, 1)).unwrap().locked);
    assert!(!layout.map.is_walkable(Position::new(7, 1)));

    let player = state.player().unwrap();
    assert_eq!(player.inventory.len(), 3);
    assert_eq!(player.spellbook.len(), 3);
}

#[test]
fn turns_run_against_loaded_content() {
    let (bundle, layout, mut state) = first_floor();
    let rng = PcgRng;
    let env = Env::with_all(
        &layout.map,
        &bundle.items,
        &bundle.spells,
        &bundle.config,
        &rng,
    );
    let mut log = MessageLog::new();

    let err = GameEngine::new(&mut state)
        .execute_turn(env, EntityId::PLAYER, Intent::Bump(Direction::West), &mut log)
        .unwrap_err();
    assert_eq!(
        err.kind,
        ActionError::Impossible(Impossible::Blocked)
    );
    assert_eq!(state.turn.nonce, 0);

    GameEngine::new(&mut state)
        .execute_turn(env, EntityId::PLAYER, Intent::Bump(Direction::East), &mut log)
        .unwrap();

    // 2 power against 1 defense, nothing equipped yet
    assert_eq!(state.actor(EntityId(1)).unwrap().hp.current, 9);
    assert_eq!(state.turn.nonce, 1);
}
