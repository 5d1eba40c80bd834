//! Deterministic turn rules of the crawler.
//!
//! `crawler-core` resolves one actor's turn at a time: condition ticks,
//! condition-driven action substitution, melee and ranged combat with
//! elemental affinities, on-hit status conditions and recharge-gated special
//! attacks. Collaborators (map, item and spell catalogs, randomness, floor
//! generation, message log) are reached through the oracle traits in [`env`]
//! and [`event`]. All state mutation for a turn flows through
//! [`engine::GameEngine`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod special;
pub mod state;
pub mod status;

pub use action::{
    Action, ActionError, Blocker, Direction, Impossible, Intent, Resolution, TurnContext, TurnPlan,
    perform, plan_turn,
};
pub use ai::{AiBehavior, AiContext, AttackPolicy, TargetPolicy, decide};
pub use combat::{AttackOutcome, AttackReport, AttackStyle};
pub use config::GameConfig;
pub use engine::{GameEngine, TurnError, TurnOutcome};
pub use env::{
    ConsumableEffect, DijkstraPathfinder, Env, EquipSlotKind, FloorLifecycle, ItemDefinition,
    ItemOracle, MapDimensions, MapOracle, Material, OracleError, Pathfinder, PcgRng, RngOracle,
    SpellDefinition, SpellEffect, SpellHandle, SpellOracle, SpellTargeting,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use event::{ColorTag, Message, MessageLog, MessageSink, TurnEvent};
pub use special::{SpecialReport, use_special};
pub use state::{
    ActorState, AffinityProfile, ChestState, ConditionKind, ConditionRegistry, DamageMultiplier,
    ElementKind, EntityId, EquipSlot, Equipment, Faction, GameState, GroundItem, Holds,
    InventoryState, ItemHandle, ItemId, ItemInstance, Position, ResourceMeter, SpecialAbility,
    SpecialAttackKind, SpecialAttackProfile, TurnState, WorldState,
};
pub use status::{ApplyResult, ConditionOutcome, TickReport};
