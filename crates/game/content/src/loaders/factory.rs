//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use crawler_core::{ConsumableEffect, GameConfig};

use crate::loaders::{
    ActorCatalog, ActorLoader, ConfigLoader, ItemLoader, LoadResult, MapLayout, MapLoader,
    SpellLoader,
};
use crate::oracle::{ItemCatalog, SpellCatalog};

/// Everything loaded from one data directory, cross-checked.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub items: ItemCatalog,
    pub spells: SpellCatalog,
    pub actors: ActorCatalog,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── spells.ron
/// ├── actors.ron
/// └── maps/
///     └── first_floor.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load spell catalog from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<SpellCatalog> {
        SpellLoader::load(&self.data_dir.join("spells.ron"))
    }

    /// Load actor catalog from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<ActorCatalog> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load a floor from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapLayout> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Loads every catalog and checks the references between them.
    ///
    /// Scrolls must name a known spell, and spellbooks and starting items
    /// must name known entries.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            items: self.load_items()?,
            spells: self.load_spells()?,
            actors: self.load_actors()?,
        };
        verify_references(&bundle)?;

        tracing::info!(
            target: "content::factory",
            data_dir = %self.data_dir.display(),
            items = bundle.items.len(),
            spells = bundle.spells.len(),
            actors = bundle.actors.len(),
            "content loaded"
        );
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn verify_references(bundle: &ContentBundle) -> LoadResult<()> {
    for def in bundle.items.iter() {
        if let Some(ConsumableEffect::Cast(spell)) = def.consumable
            && !bundle.spells.contains(spell)
        {
            anyhow::bail!("Item '{}' casts unknown spell {}", def.name, spell.0);
        }
    }
    for (id, template) in bundle.actors.iter() {
        if let Some(spell) = template.spells.iter().find(|s| !bundle.spells.contains(**s)) {
            anyhow::bail!("Actor '{}' knows unknown spell {}", id, spell.0);
        }
        if let Some(item) = template
            .starting_items
            .iter()
            .find(|h| bundle.items.get(**h).is_none())
        {
            anyhow::bail!("Actor '{}' starts with unknown item {}", id, item.0);
        }
    }
    Ok(())
}
