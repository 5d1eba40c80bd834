//! Traits describing the collaborators the rules consult.
//!
//! Oracles expose static map geometry, item and spell definitions, tunables and
//! randomness. The [`Env`] aggregate bundles them so the engine can reach
//! everything it needs without hard coupling to concrete implementations.
mod error;
mod floor;
mod items;
mod map;
mod path;
mod rng;
mod spells;

pub use error::OracleError;
pub use floor::FloorLifecycle;
pub use items::{ConsumableEffect, EquipSlotKind, ItemDefinition, ItemOracle, Material};
pub use map::{MapDimensions, MapOracle};
pub use path::{DijkstraPathfinder, Pathfinder};
pub use rng::{Dice, PcgRng, RngOracle, compute_seed};
pub use spells::{SpellDefinition, SpellEffect, SpellHandle, SpellOracle, SpellTargeting};

use crate::config::GameConfig;

/// Aggregates the oracles required by the turn pipeline.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    map: Option<&'a dyn MapOracle>,
    items: Option<&'a dyn ItemOracle>,
    spells: Option<&'a dyn SpellOracle>,
    config: Option<&'a GameConfig>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> Env<'a> {
    pub fn new(
        map: Option<&'a dyn MapOracle>,
        items: Option<&'a dyn ItemOracle>,
        spells: Option<&'a dyn SpellOracle>,
        config: Option<&'a GameConfig>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self {
            map,
            items,
            spells,
            config,
            rng,
        }
    }

    pub fn with_all(
        map: &'a dyn MapOracle,
        items: &'a dyn ItemOracle,
        spells: &'a dyn SpellOracle,
        config: &'a GameConfig,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self::new(Some(map), Some(items), Some(spells), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            items: None,
            spells: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a dyn MapOracle, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the SpellOracle, or an error if not available.
    pub fn spells(&self) -> Result<&'a dyn SpellOracle, OracleError> {
        self.spells.ok_or(OracleError::SpellsNotAvailable)
    }

    /// Returns the game configuration, or an error if not available.
    pub fn config(&self) -> Result<&'a GameConfig, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}
