//! Floor layout loader.
//!
//! Maps are drawn as rows of characters:
//!
//! | char | meaning          |
//! |------|------------------|
//! | `#`  | wall             |
//! | `.`  | floor            |
//! | `>`  | stairs down      |
//! | `@`  | player start     |
//!
//! Chests are listed separately since they carry contents.

use std::path::Path;

use crawler_core::{ChestState, EntityId, GameState, ItemHandle, MapOracle, Position};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::oracle::GridMap;

#[derive(Debug, Deserialize)]
struct ChestRon {
    position: (i32, i32),
    #[serde(default)]
    item: Option<ItemHandle>,
    #[serde(default)]
    locked: bool,
}

#[derive(Debug, Deserialize)]
struct MapRon {
    rows: Vec<String>,
    #[serde(default)]
    chests: Vec<ChestRon>,
}

/// A parsed floor: terrain plus the features placed into game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapLayout {
    pub map: GridMap,
    pub player_start: Option<Position>,
    chests: Vec<(Position, Option<ItemHandle>, bool)>,
}

impl MapLayout {
    /// Writes stairs and chests into `state`, replacing the previous floor's.
    ///
    /// Chest contents get fresh item instances.
    pub fn apply(&self, state: &mut GameState) {
        state.world.stairs = self.map.stairs();
        state.world.chests.clear();
        state.world.ground_items.clear();
        for (position, handle, locked) in &self.chests {
            let item = handle.map(|handle| state.create_item(handle));
            let mut chest = ChestState::new(*position, item);
            chest.locked = *locked;
            state.world.chests.push(chest);
        }
        if let Some(start) = self.player_start
            && let Some(player) = state.actor_mut(EntityId::PLAYER)
        {
            player.position = start;
        }
    }

    pub fn chest_count(&self) -> usize {
        self.chests.len()
    }
}

/// Loader for floor layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a layout from a RON file.
    ///
    /// RON format: `(rows: ["###", "#>#"], chests: [...])`
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapLayout> {
        let data: MapRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let height = data.rows.len();
        let width = data.rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            anyhow::bail!("Map has no cells");
        }

        let mut map = GridMap::open(width as u32, height as u32);
        let mut player_start = None;
        for (y, row) in data.rows.iter().enumerate() {
            if row.chars().count() != width {
                anyhow::bail!(
                    "Map row {} has width {}, expected {}",
                    y,
                    row.chars().count(),
                    width
                );
            }
            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                match glyph {
                    '#' => map.set_wall(position, true),
                    '.' => {}
                    '>' => {
                        if map.stairs().is_some() {
                            anyhow::bail!("Map has more than one stairs cell");
                        }
                        map.set_stairs(Some(position));
                    }
                    '@' => player_start = Some(position),
                    other => anyhow::bail!("Unknown map glyph '{}' at ({}, {})", other, x, y),
                }
            }
        }

        let mut chests = Vec::with_capacity(data.chests.len());
        for chest in data.chests {
            let position = Position::new(chest.position.0, chest.position.1);
            if !map.is_walkable(position) {
                anyhow::bail!("Chest at ({}, {}) is not on a floor cell", position.x, position.y);
            }
            chests.push((position, chest.item, chest.locked));
        }

        Ok(MapLayout {
            map,
            player_start,
            chests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawler_core::ActorState;

    const ROOM: &str = r######"(
        rows: [
            "#####",
            "#@..#",
            "#..>#",
            "#####",
        ],
        chests: [
            (position: (2, 1), item: Some(ItemHandle(3))),
            (position: (1, 2), locked: true),
        ],
    )"######;

    #[test]
    fn parses_terrain_and_features() {
        let layout = MapLoader::parse(ROOM).unwrap();

        assert_eq!(layout.map.dimensions().width, 5);
        assert_eq!(layout.map.dimensions().height, 4);
        assert!(!layout.map.is_walkable(Position::new(0, 0)));
        assert!(layout.map.is_walkable(Position::new(3, 2)));
        assert_eq!(layout.map.stairs(), Some(Position::new(3, 2)));
        assert_eq!(layout.player_start, Some(Position::new(1, 1)));
        assert_eq!(layout.chest_count(), 2);
    }

    #[test]
    fn apply_places_features() {
        let layout = MapLoader::parse(ROOM).unwrap();
        let mut state = GameState::new(3);
        state.spawn(ActorState::new(EntityId::PLAYER, "player", Position::new(0, 0), 10));

        layout.apply(&mut state);

        assert_eq!(state.world.stairs, Some(Position::new(3, 2)));
        assert_eq!(state.player().unwrap().position, Position::new(1, 1));
        let loot = state.chest_at(Position::new(2, 1)).unwrap();
        assert_eq!(loot.item.map(|i| i.handle), Some(ItemHandle(3)));
        assert!(!loot.locked);
        assert!(state.chest_at(Position::new(1, 2)).unwrap().locked);
    }

    #[test]
    fn rejects_ragged_rows_and_unknown_glyphs() {
        let err = MapLoader::parse(r######"(rows: ["###", "##"])"######).unwrap_err();
        assert!(err.to_string().contains("row 1"));

        let err = MapLoader::parse(r######"(rows: ["#~#"])"######).unwrap_err();
        assert!(err.to_string().contains("Unknown map glyph '~'"));
    }

    #[test]
    fn rejects_chest_in_wall() {
        let err =
            MapLoader::parse(r######"(rows: ["###"], chests: [(position: (0, 0))])"######).unwrap_err();
        assert!(err.to_string().contains("not on a floor cell"));
    }
}
