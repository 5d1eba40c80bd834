//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ItemHandle, Position};

use super::SpellHandle;

/// Errors that occur when accessing oracle data.
///
/// Missing oracles are fatal: the engine cannot resolve a turn without the map
/// or the RNG. Missing definitions indicate a bad reference in state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("MapOracle not available")]
    MapNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("SpellOracle not available")]
    SpellsNotAvailable,

    #[error("GameConfig not available")]
    ConfigNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("position {0:?} is out of map bounds")]
    PositionOutOfBounds(Position),

    #[error("item definition {0:?} not found")]
    ItemNotFound(ItemHandle),

    #[error("spell definition {0:?} not found")]
    SpellNotFound(SpellHandle),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            MapNotAvailable | ItemsNotAvailable | SpellsNotAvailable | ConfigNotAvailable
            | RngNotAvailable => ErrorSeverity::Fatal,
            PositionOutOfBounds(_) | ItemNotFound(_) | SpellNotFound(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MapNotAvailable => "ORACLE_MAP_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            SpellsNotAvailable => "ORACLE_SPELLS_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            PositionOutOfBounds(_) => "ORACLE_POSITION_OUT_OF_BOUNDS",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            SpellNotFound(_) => "ORACLE_SPELL_NOT_FOUND",
        }
    }
}
