//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON or TOML file into a catalog or config value and
//! rejects data that would break rule invariants at play time.

pub mod actors;
pub mod config;
pub mod factory;
pub mod item;
pub mod map;
pub mod spells;

pub use actors::{ActorCatalog, ActorLoader, ActorTemplate, AffinitySpec, SpecialSpec};
pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use item::ItemLoader;
pub use map::{MapLayout, MapLoader};
pub use spells::SpellLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
