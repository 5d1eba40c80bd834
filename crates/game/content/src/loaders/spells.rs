//! Spell catalog loader.

use std::path::Path;

use crawler_core::{SpellDefinition, SpellTargeting};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::oracle::SpellCatalog;

#[derive(Debug, Deserialize)]
struct SpellFile {
    spells: Vec<SpellDefinition>,
}

/// Loader for spell catalogs from RON files.
pub struct SpellLoader;

impl SpellLoader {
    /// Load a spell catalog from a RON file.
    ///
    /// RON format: `(spells: [SpellDefinition, ...])`
    pub fn load(path: &Path) -> LoadResult<SpellCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SpellCatalog> {
        let file: SpellFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        let mut catalog = SpellCatalog::new();
        for def in file.spells {
            validate(&def)?;
            let handle = def.handle;
            if catalog.insert(def).is_some() {
                anyhow::bail!("Duplicate spell handle {}", handle.0);
            }
        }

        tracing::debug!(target: "content::spells", count = catalog.len(), "loaded spell catalog");
        Ok(catalog)
    }
}

fn validate(def: &SpellDefinition) -> LoadResult<()> {
    if def.targeting == SpellTargeting::Area && def.radius == 0 {
        anyhow::bail!("Area spell '{}' needs a positive radius", def.name);
    }
    if def.targeting != SpellTargeting::Caster && def.range == 0 {
        anyhow::bail!("Spell '{}' has zero range", def.name);
    }
    Ok(())
}
