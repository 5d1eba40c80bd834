//! Static floor layout served through [`crawler_core::MapOracle`].
use crawler_core::{MapDimensions, MapOracle, Position};

/// Walkability and field of view for one floor.
///
/// Holds immutable terrain. Chests, items and actors live in the game state;
/// only the visibility mask changes as the player moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    dimensions: MapDimensions,
    walls: Vec<bool>,
    visible: Vec<bool>,
    stairs: Option<Position>,
}

impl GridMap {
    /// Open floor of the given size, fully visible.
    pub fn open(width: u32, height: u32) -> Self {
        let cells = (width as usize) * (height as usize);
        Self {
            dimensions: MapDimensions::new(width, height),
            walls: vec![false; cells],
            visible: vec![true; cells],
            stairs: None,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    /// Marks a cell as wall; out-of-bounds cells are ignored.
    pub fn set_wall(&mut self, position: Position, wall: bool) {
        if let Some(index) = self.index(position) {
            self.walls[index] = wall;
        }
    }

    /// Updates the field of view for one cell.
    pub fn set_visible(&mut self, position: Position, visible: bool) {
        if let Some(index) = self.index(position) {
            self.visible[index] = visible;
        }
    }

    /// Replaces the whole field of view.
    pub fn set_all_visible(&mut self, visible: bool) {
        self.visible.fill(visible);
    }

    pub fn set_stairs(&mut self, position: Option<Position>) {
        self.stairs = position;
    }

    /// Stairs cell of the floor, if it has one.
    pub fn stairs(&self) -> Option<Position> {
        self.stairs
    }

    /// Walkable cells in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.dimensions.width as i32;
        self.walls
            .iter()
            .enumerate()
            .filter(|(_, wall)| !**wall)
            .map(move |(index, _)| Position::new(index as i32 % width, index as i32 / width))
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn is_walkable(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| !self.walls[index])
    }

    fn is_visible(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.visible[index])
    }
}
