//! [`crawler_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use crawler_core::{ItemDefinition, ItemHandle, ItemOracle};

/// Item definitions keyed by handle.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    definitions: HashMap<ItemHandle, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, returning the one it replaced.
    pub fn insert(&mut self, def: ItemDefinition) -> Option<ItemDefinition> {
        self.definitions.insert(def.handle, def)
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.definitions.get(&handle)
    }

    /// First definition with the given display name.
    pub fn find_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.definitions.values().find(|def| def.name == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> + '_ {
        self.definitions.values()
    }
}

impl FromIterator<ItemDefinition> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = ItemDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for def in iter {
            catalog.insert(def);
        }
        catalog
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.definitions.get(&handle).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        let mut all: Vec<ItemDefinition> = self.definitions.values().cloned().collect();
        all.sort_by_key(|def| def.handle.0);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawler_core::{EquipSlotKind, Material};

    #[test]
    fn lookup_by_handle_and_name() {
        let catalog: ItemCatalog = [
            ItemDefinition::new(ItemHandle(2), "dagger").equippable(EquipSlotKind::Melee, 2, 0),
            ItemDefinition::new(ItemHandle(1), "bandage").made_of(Material::Cloth),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.definition(ItemHandle(2)).map(|d| d.power_bonus), Some(2));
        assert_eq!(catalog.find_by_name("bandage").map(|d| d.handle), Some(ItemHandle(1)));
        assert!(catalog.definition(ItemHandle(9)).is_none());

        let handles: Vec<u32> = catalog.all_definitions().iter().map(|d| d.handle.0).collect();
        assert_eq!(handles, vec![1, 2]);
    }
}
