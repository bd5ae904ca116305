//! Observable side effects emitted by the simulation.
//!
//! Events are buffered on the game state while a turn runs and drained into
//! the [`crate::engine::TurnReport`] so UI/logging collaborators can react
//! without the core calling back into them.

use crate::state::{EntityId, EquipKind, GridVec};

/// Notifications consumed by UI and logging collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A stack's quantity changed in place.
    ItemCountChanged { pawn: EntityId, slot: usize },
    /// A new stack was created.
    ItemAdded {
        pawn: EntityId,
        display_name: String,
        slot: usize,
    },
    /// A stack was emptied and deleted.
    ItemRemoved {
        pawn: EntityId,
        name: String,
        slot: usize,
    },
    /// A pawn's health dropped to zero or below.
    Died { victim: EntityId, source: EntityId },
    /// A pawn relocated between cells.
    Moved {
        pawn: EntityId,
        from: GridVec,
        to: GridVec,
    },
    /// A mover entered the cell of an Overlap-collision occupant.
    Overlapped { occupant: EntityId, mover: EntityId },
    /// An item was placed in an equip slot.
    Equipped { pawn: EntityId, kind: EquipKind },
}
