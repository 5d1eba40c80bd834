//! Data-driven content for the crawler.
//!
//! This crate provides in-memory oracle implementations and loaders for
//! RON/TOML data files:
//! - Item and spell catalogs ([`oracle::ItemCatalog`], [`oracle::SpellCatalog`])
//! - Floor layouts ([`oracle::GridMap`])
//! - Actor templates spawned into game state
//! - Game configuration
//!
//! Catalogs are consumed through the `crawler-core` oracle traits and never
//! appear in game state.

pub mod oracle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use oracle::{GridMap, ItemCatalog, SpellCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorCatalog, ActorLoader, ActorTemplate, ConfigLoader, ContentBundle, ContentFactory,
    ItemLoader, MapLayout, MapLoader, SpellLoader,
};
