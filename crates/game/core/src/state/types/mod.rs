pub mod actor;
pub mod affinity;
pub mod common;
pub mod item;
pub mod specials;
pub mod status;
pub mod turn;
pub mod world;

pub use actor::{
    ActorState, EquipSlot, Equipment, Faction, Holds, InventoryState, effective_bonus,
};
pub use affinity::{AffinityProfile, DamageMultiplier, ElementAffinity, ElementKind};
pub use common::{EntityId, Position, ResourceMeter};
pub use item::{GroundItem, ItemHandle, ItemId, ItemInstance};
pub use specials::{SpecialAbility, SpecialAttackKind, SpecialAttackProfile};
pub use status::{ConditionKind, ConditionRegistry, ConditionState};
pub use turn::TurnState;
pub use world::{ChestState, WorldState};
