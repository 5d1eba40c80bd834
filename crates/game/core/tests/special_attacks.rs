mod common;

use common::{HEALTH_POTION, LEATHER_ARMOR, RING, SWORD, World, monster, player_at, state_with};
use crawler_core::{
    Action, ActorState, Direction, EntityId, GameEngine, GameState, Impossible, InventoryState,
    ItemHandle, ItemId, MessageLog, SpecialAttackKind, SpecialAttackProfile, TurnEvent,
    TurnOutcome,
};

const MONSTER: EntityId = EntityId(1);

/// Profile with `kind` enabled and ready to fire.
fn primed(kind: SpecialAttackKind, amount: u32, damage: u32) -> SpecialAttackProfile {
    let mut profile = SpecialAttackProfile::new().with_ability(kind, amount, damage);
    profile.get_mut(kind).recharge = kind.threshold() - 1;
    profile
}

fn attacker(specials: SpecialAttackProfile) -> ActorState {
    monster(1, "shade", 3, 2, 20)
        .with_stats(4, 0)
        .with_specials(specials)
}

fn give(state: &mut GameState, owner: EntityId, handle: ItemHandle) -> ItemId {
    let item = state.create_item(handle);
    state
        .actor_mut(owner)
        .unwrap()
        .inventory
        .push(item)
        .unwrap();
    item.id
}

fn strike(world: &World, state: &mut GameState, log: &mut MessageLog) -> TurnOutcome {
    GameEngine::new(state)
        .execute_turn(world.env(), MONSTER, Action::Special(Direction::West).into(), log)
        .unwrap()
}

fn reprime(state: &mut GameState, kind: SpecialAttackKind) {
    state
        .actor_mut(MONSTER)
        .unwrap()
        .specials
        .get_mut(kind)
        .recharge = kind.threshold() - 1;
}

#[test]
fn percentile_strikes_a_share_of_max_hp() {
    let world = World::new();
    let mut state = state_with([
        player_at(2, 2),
        attacker(primed(SpecialAttackKind::Percentile, 25, 0)),
    ]);
    let mut log = MessageLog::new();

    let outcome = strike(&world, &mut state, &mut log);

    assert_eq!(state.player().unwrap().hp.current, 22);
    assert!(log.contains("A vital point of player is struck!"));
    assert!(log.contains("Shade hurts player for 8 hit points."));
    assert!(outcome.events.contains(&TurnEvent::SpecialFired {
        attacker: MONSTER,
        target: EntityId::PLAYER,
        kind: SpecialAttackKind::Percentile,
        damage: 8
    }));
    let shade = state.actor(MONSTER).unwrap();
    assert_eq!(shade.specials.get(SpecialAttackKind::Percentile).recharge, 0);
}

#[test]
fn nothing_ready_falls_back_to_melee_and_recharges() {
    let world = World::new();
    let specials = SpecialAttackProfile::new().with_ability(SpecialAttackKind::Steal, 0, 5);
    let mut state = state_with([player_at(2, 2), attacker(specials)]);
    let mut log = MessageLog::new();

    let outcome = strike(&world, &mut state, &mut log);

    assert_eq!(state.player().unwrap().hp.current, 27);
    assert!(outcome.events.iter().any(|e| matches!(e, TurnEvent::Attack(_))));
    let shade = state.actor(MONSTER).unwrap();
    assert_eq!(shade.specials.get(SpecialAttackKind::Steal).recharge, 1);
}

#[test]
fn first_ready_ability_wins_and_others_recharge() {
    let world = World::new();
    let mut specials = primed(SpecialAttackKind::StatsDrain, 1, 2);
    specials = specials.with_ability(SpecialAttackKind::Steal, 0, 5);
    specials.get_mut(SpecialAttackKind::Steal).recharge = 2;
    let mut state = state_with([player_at(2, 2), attacker(specials)]);
    let mut log = MessageLog::new();

    strike(&world, &mut state, &mut log);

    let shade = state.actor(MONSTER).unwrap();
    assert_eq!(shade.specials.get(SpecialAttackKind::StatsDrain).recharge, 0);
    assert_eq!(shade.specials.get(SpecialAttackKind::Steal).recharge, 3);
}

#[test]
fn stats_drain_lowers_power_and_defense() {
    let world = World::new();
    let mut state = state_with([
        player_at(2, 2),
        attacker(primed(SpecialAttackKind::StatsDrain, 2, 3)),
    ]);
    let mut log = MessageLog::new();

    strike(&world, &mut state, &mut log);

    let player = state.player().unwrap();
    assert_eq!((player.base_power, player.base_defense), (3, 0));
    assert_eq!(player.hp.current, 27);
    assert!(log.contains("You feel your strength drained away!"));
}

#[test]
fn stats_drain_on_drained_target_does_nothing() {
    let world = World::new();
    let mut state = state_with([
        player_at(2, 2).with_stats(0, 0),
        attacker(primed(SpecialAttackKind::StatsDrain, 2, 3)),
    ]);
    let mut log = MessageLog::new();

    strike(&world, &mut state, &mut log);

    assert!(state.player().unwrap().hp.is_full());
    assert!(log.contains("takes no damage."));
}

#[test]
fn corrosion_damages_then_destroys_metal() {
    let world = World::new();
    let mut state = state_with([
        player_at(2, 2),
        attacker(primed(SpecialAttackKind::Corrosion, 0, 5)),
    ]);
    give(&mut state, EntityId::PLAYER, LEATHER_ARMOR);
    let sword = give(&mut state, EntityId::PLAYER, SWORD);
    state
        .actor_mut(EntityId::PLAYER)
        .unwrap()
        .equipment
        .equip(crawler_core::EquipSlot::Melee, sword);
    let mut log = MessageLog::new();

    let outcome = strike(&world, &mut state, &mut log);
    assert!(outcome.events.contains(&TurnEvent::ItemDamaged {
        owner: EntityId::PLAYER,
        item: sword
    }));
    let player = state.player().unwrap();
    assert!(player.inventory.get(sword).unwrap().damaged);
    assert_eq!(player.hp.current, 26);
    assert!(log.contains("The sword of player is corroded."));

    reprime(&mut state, SpecialAttackKind::Corrosion);
    let outcome = strike(&world, &mut state, &mut log);
    assert!(outcome.events.contains(&TurnEvent::ItemDestroyed {
        owner: EntityId::PLAYER,
        item: sword
    }));
    let player = state.player().unwrap();
    assert!(!player.inventory.contains(sword));
    assert!(player.equipment.is_empty());
    assert_eq!(player.inventory.len(), 1);
}

#[test]
fn dispel_only_touches_magic_items() {
    let world = World::new();
    let mut state = state_with([
        player_at(2, 2),
        attacker(primed(SpecialAttackKind::Dispel, 0, 2)),
    ]);
    let sword = give(&mut state, EntityId::PLAYER, SWORD);
    let ring = give(&mut state, EntityId::PLAYER, RING);
    let mut log = MessageLog::new();

    strike(&world, &mut state, &mut log);

    let player = state.player().unwrap();
    assert!(player.inventory.get(ring).unwrap().damaged);
    assert!(!player.inventory.get(sword).unwrap().damaged);
    assert_eq!(player.hp.current, 29);
}

#[test]
fn rot_doubles_damage_on_targets_without_a_pack() {
    let world = World::new();
    let rotter = monster(2, "mold", 4, 2, 10)
        .with_specials(primed(SpecialAttackKind::Rot, 0, 3));
    let mut state = state_with([player_at(8, 8), monster(1, "rat", 3, 2, 10), rotter]);
    let mut log = MessageLog::new();

    GameEngine::new(&mut state)
        .execute_turn(world.env(), EntityId(2), Action::Special(Direction::West).into(), &mut log)
        .unwrap();

    assert_eq!(state.actor(MONSTER).unwrap().hp.current, 4);
}

#[test]
fn steal_takes_the_first_equippable_item() {
    let world = World::new();
    let thief = attacker(primed(SpecialAttackKind::Steal, 0, 4))
        .with_inventory(InventoryState::with_capacity(4));
    let mut state = state_with([player_at(2, 2), thief]);
    let potion = give(&mut state, EntityId::PLAYER, HEALTH_POTION);
    let sword = give(&mut state, EntityId::PLAYER, SWORD);
    let mut log = MessageLog::new();

    let outcome = strike(&world, &mut state, &mut log);

    let player = state.player().unwrap();
    assert!(player.inventory.contains(potion));
    assert!(!player.inventory.contains(sword));
    assert!(state.actor(MONSTER).unwrap().inventory.contains(sword));
    assert_eq!(player.hp.current, 27);
    assert!(outcome.events.contains(&TurnEvent::ItemStolen {
        from: EntityId::PLAYER,
        by: MONSTER,
        item: sword
    }));
    assert!(log.contains("The sword is stolen from player!"));
}

#[test]
fn stolen_item_drops_when_thief_cannot_carry() {
    let world = World::new();
    let mut state = state_with([
        player_at(2, 2),
        attacker(primed(SpecialAttackKind::Steal, 0, 4)),
    ]);
    let sword = give(&mut state, EntityId::PLAYER, SWORD);
    let mut log = MessageLog::new();

    strike(&world, &mut state, &mut log);

    let ground = state.world.item_at(crawler_core::Position::new(2, 2));
    assert_eq!(ground.map(|g| g.item.id), Some(sword));
}

#[test]
fn steal_from_empty_pack_doubles_damage() {
    let world = World::new();
    let mut state = state_with([
        player_at(2, 2),
        attacker(primed(SpecialAttackKind::Steal, 0, 4)),
    ]);
    let mut log = MessageLog::new();

    strike(&world, &mut state, &mut log);

    assert_eq!(state.player().unwrap().hp.current, 22);
}

#[test]
fn immune_target_resists_and_counter_resets() {
    let world = World::new();
    let mut player = player_at(2, 2);
    player.specials = SpecialAttackProfile::new().with_immunity(SpecialAttackKind::Percentile);
    let mut state = state_with([
        player,
        attacker(primed(SpecialAttackKind::Percentile, 50, 0)),
    ]);
    let mut log = MessageLog::new();

    let outcome = strike(&world, &mut state, &mut log);

    assert!(state.player().unwrap().hp.is_full());
    assert!(outcome.events.contains(&TurnEvent::SpecialResisted {
        attacker: MONSTER,
        target: EntityId::PLAYER,
        kind: SpecialAttackKind::Percentile
    }));
    let shade = state.actor(MONSTER).unwrap();
    assert_eq!(shade.specials.get(SpecialAttackKind::Percentile).recharge, 0);
}

#[test]
fn ingest_swallows_until_the_holder_dies() {
    let world = World::new();
    let worm = monster(1, "worm", 3, 2, 5).with_specials(primed(SpecialAttackKind::Ingest, 0, 2));
    let mut state = state_with([player_at(2, 2), worm]);
    let mut log = MessageLog::new();

    strike(&world, &mut state, &mut log);
    assert_eq!(state.player().unwrap().holds.ingested_by, Some(MONSTER));
    assert_eq!(state.actor(MONSTER).unwrap().holds.ingesting, Some(EntityId::PLAYER));
    assert!(state.player().unwrap().hp.is_full());
    assert!(log.contains("You have been swallowed!"));

    reprime(&mut state, SpecialAttackKind::Ingest);
    let mut log = MessageLog::new();
    strike(&world, &mut state, &mut log);
    assert!(log.contains("Player cannot be swallowed now."));

    let err = GameEngine::new(&mut state)
        .execute_turn(world.env(), EntityId::PLAYER, Action::Move(Direction::South).into(), &mut log)
        .unwrap_err();
    assert_eq!(err.impossible(), Some(Impossible::Ingested));

    GameEngine::new(&mut state)
        .execute_turn(world.env(), EntityId::PLAYER, Action::Melee(Direction::East).into(), &mut log)
        .unwrap();
    let player = state.player().unwrap();
    assert_eq!(player.hp.current, 28);
    assert_eq!(player.holds.ingested_by, None);
    assert!(log.contains("You are released from the belly."));
}
