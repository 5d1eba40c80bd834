//! Action errors.
//!
//! [`Impossible`] is the only player-facing rejection. It is raised before any
//! mutation, and its `Display` text is what the player reads.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemId;

/// Why an attempted action cannot be carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Impossible {
    #[error("That way is blocked.")]
    Blocked,
    #[error("You are grabbed, you can't move.")]
    Grabbed,
    #[error("You have been swallowed, you can't move.")]
    Ingested,
    #[error("Nothing to attack.")]
    NothingToAttack,
    #[error("There is no chest there.")]
    NoChest,
    #[error("The chest is locked.")]
    ChestLocked,
    #[error("The chest is empty.")]
    ChestEmpty,
    #[error("Your inventory is full.")]
    InventoryFull,
    #[error("There is nothing here to pick up.")]
    NothingToPickUp,
    #[error("There are no stairs here.")]
    NoStairs,
    #[error("This item cannot be equipped.")]
    NotEquippable,
    #[error("This item cannot be used.")]
    NotUsable,
    #[error("Your health is full!")]
    HealthFull,
    #[error("Your mana is full!")]
    ManaFull,
    #[error("You don't have enough mana.")]
    NotEnoughMana,
    #[error("You don't know that spell.")]
    UnknownSpell,
    #[error("No enemy is close enough to strike.")]
    NoEnemyInRange,
    #[error("You cannot target an area that you cannot see.")]
    TargetNotVisible,
    #[error("You must select an enemy to target.")]
    NoTargetSelected,
    #[error("You cannot cast this spell on yourself!")]
    SelfTarget,
    #[error("The target is out of range.")]
    OutOfRange,
    #[error("There are no targets in the radius.")]
    NoTargetsInRadius,
}

/// Errors raised while resolving a turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Recoverable rejection of the intended action.
    #[error("{0}")]
    Impossible(#[from] Impossible),

    #[error("Actor not found")]
    ActorNotFound,

    #[error("Actor is dead")]
    ActorDead,

    /// The item is not in the actor's inventory.
    #[error("Item {0:?} not in inventory")]
    ItemNotFound(ItemId),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}

impl ActionError {
    pub fn is_impossible(&self) -> bool {
        matches!(self, Self::Impossible(_))
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Impossible(_) => ErrorSeverity::Recoverable,
            Self::ActorNotFound | Self::ActorDead | Self::ItemNotFound(_) => {
                ErrorSeverity::Validation
            }
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Impossible(_) => "ACTION_IMPOSSIBLE",
            Self::ActorNotFound => "ACTION_ACTOR_NOT_FOUND",
            Self::ActorDead => "ACTION_ACTOR_DEAD",
            Self::ItemNotFound(_) => "ACTION_ITEM_NOT_FOUND",
            Self::Oracle(err) => err.error_code(),
        }
    }
}
