use std::collections::BTreeMap;

use super::{EntityId, GridVec};

/// Per-location occupancy record in the grid.
///
/// `occupied` and `occupant` are written together by movement but are
/// deliberately independent fields: movement records the mover's own
/// collision policy in `occupied`, so an Overlap-collision pawn leaves
/// `occupied == false` while its id is present. Consumers must check both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub location: GridVec,
    pub occupied: bool,
    pub occupant: Option<EntityId>,
}

impl Cell {
    /// An unoccupied cell at the given location.
    pub const fn empty(location: GridVec) -> Self {
        Self {
            location,
            occupied: false,
            occupant: None,
        }
    }

    pub fn is_effectively_free(&self) -> bool {
        !self.occupied && self.occupant.is_none()
    }
}

/// Sparse mapping from grid location to occupancy data.
///
/// Only written locations are stored; reads of unseen locations synthesize a
/// default cell and never insert, so the store grows with movement, not with
/// queries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellGrid {
    cells: BTreeMap<GridVec, Cell>,
}

impl CellGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored cell, or a default empty cell for unseen locations.
    pub fn cell(&self, location: GridVec) -> Cell {
        self.cells
            .get(&location)
            .copied()
            .unwrap_or_else(|| Cell::empty(location))
    }

    /// Unconditionally overwrites the cell at `location`.
    ///
    /// No ownership or conflict checks: movement logic is the sole mutator.
    pub fn set_cell(&mut self, location: GridVec, cell: Cell) {
        self.cells.insert(location, cell);
    }

    /// Number of locations ever written.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GridVec, &Cell)> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut grid = CellGrid::new();
        let loc = GridVec::new(4, -2);
        let cell = Cell {
            location: loc,
            occupied: true,
            occupant: Some(EntityId(7)),
        };

        grid.set_cell(loc, cell);
        assert_eq!(grid.cell(loc), cell);
    }

    #[test]
    fn unseen_location_reads_as_empty_without_inserting() {
        let grid = CellGrid::new();
        let cell = grid.cell(GridVec::new(100, 100));

        assert!(cell.is_effectively_free());
        assert_eq!(cell.location, GridVec::new(100, 100));
        assert!(grid.is_empty());
    }

    #[test]
    fn set_cell_overwrites_without_checks() {
        let mut grid = CellGrid::new();
        let loc = GridVec::ORIGIN;

        grid.set_cell(
            loc,
            Cell {
                location: loc,
                occupied: true,
                occupant: Some(EntityId(1)),
            },
        );
        grid.set_cell(loc, Cell::empty(loc));

        assert!(grid.cell(loc).is_effectively_free());
        assert_eq!(grid.len(), 1);
    }
}
