//! In-memory oracle implementations filled by the loaders.

mod items;
mod map;
mod spells;

pub use items::ItemCatalog;
pub use map::GridMap;
pub use spells::SpellCatalog;
