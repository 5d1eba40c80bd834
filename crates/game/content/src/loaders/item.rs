//! Item catalog loader.

use std::path::Path;

use crawler_core::ItemDefinition;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::oracle::ItemCatalog;

#[derive(Debug, Deserialize)]
struct ItemFile {
    items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// RON format: `(items: [ItemDefinition, ...])`
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut catalog = ItemCatalog::new();
        for def in file.items {
            if def.slot.is_some() && def.consumable.is_some() {
                anyhow::bail!("Item '{}' cannot be both equippable and consumable", def.name);
            }
            let handle = def.handle;
            if catalog.insert(def).is_some() {
                anyhow::bail!("Duplicate item handle {}", handle.0);
            }
        }

        tracing::debug!(target: "content::items", count = catalog.len(), "loaded item catalog");
        Ok(catalog)
    }
}
