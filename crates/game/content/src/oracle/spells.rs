//! [`crawler_core::SpellOracle`] backed by an in-memory map.
use std::collections::HashMap;

use crawler_core::{SpellDefinition, SpellHandle, SpellOracle};

#[derive(Clone, Debug, Default)]
pub struct SpellCatalog {
    definitions: HashMap<SpellHandle, SpellDefinition>,
}

impl SpellCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, returning the one it replaced.
    pub fn insert(&mut self, def: SpellDefinition) -> Option<SpellDefinition> {
        self.definitions.insert(def.handle, def)
    }

    pub fn get(&self, handle: SpellHandle) -> Option<&SpellDefinition> {
        self.definitions.get(&handle)
    }

    pub fn contains(&self, handle: SpellHandle) -> bool {
        self.definitions.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl FromIterator<SpellDefinition> for SpellCatalog {
    fn from_iter<I: IntoIterator<Item = SpellDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for def in iter {
            catalog.insert(def);
        }
        catalog
    }
}

impl SpellOracle for SpellCatalog {
    fn spell(&self, handle: SpellHandle) -> Option<SpellDefinition> {
        self.definitions.get(&handle).cloned()
    }
}
