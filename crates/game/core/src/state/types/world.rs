use super::{Cell, CellGrid, GridVec};

/// World-level runtime state: the authoritative occupancy grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub grid: CellGrid,
}

impl WorldState {
    pub fn new(grid: CellGrid) -> Self {
        Self { grid }
    }

    /// Convenience passthrough to [`CellGrid::cell`].
    pub fn cell(&self, location: GridVec) -> Cell {
        self.grid.cell(location)
    }

    /// Convenience passthrough to [`CellGrid::set_cell`].
    pub fn set_cell(&mut self, location: GridVec, cell: Cell) {
        self.grid.set_cell(location, cell);
    }
}
