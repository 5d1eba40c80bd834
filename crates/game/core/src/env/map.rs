use crate::state::Position;

/// Static map oracle: bounds, walkability and the player's field of view.
///
/// Actor and chest occupancy come from [`crate::state::GameState`], not from
/// the map.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    fn is_walkable(&self, position: Position) -> bool;

    /// Whether the player can currently see `position`.
    fn is_visible(&self, _position: Position) -> bool {
        true
    }

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}
