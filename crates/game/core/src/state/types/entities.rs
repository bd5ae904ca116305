use bounded_vector::BoundedVec;

use crate::config::GameConfig;

use super::{EntityId, PawnState};

/// Registry of every pawn in the world, in spawn (insertion) order.
///
/// Insertion order is the processing order for the turn pipeline, so the
/// registry is effectively FIFO. Removal happens only through the sweep.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pawns: BoundedVec<PawnState, 0, { GameConfig::MAX_PAWNS }>,
}

impl EntitiesState {
    pub fn len(&self) -> usize {
        self.pawns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pawns.is_empty()
    }

    /// Registry lookup; `None` for absent or stale ids.
    pub fn pawn(&self, id: EntityId) -> Option<&PawnState> {
        self.pawns.iter().find(|pawn| pawn.id == id)
    }

    /// Mutable registry lookup; `None` for absent or stale ids.
    pub fn pawn_mut(&mut self, id: EntityId) -> Option<&mut PawnState> {
        self.pawns.iter_mut().find(|pawn| pawn.id == id)
    }

    /// Iterates pawns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PawnState> {
        self.pawns.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PawnState> {
        self.pawns.iter_mut()
    }

    /// Ids of all registered pawns, in insertion order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.pawns.iter().map(|pawn| pawn.id).collect()
    }

    /// Appends a pawn; fails when the registry is at capacity.
    pub(crate) fn push(&mut self, pawn: PawnState) -> Result<(), &'static str> {
        self.pawns.push(pawn).map_err(|_| "pawn registry full")
    }

    /// Removes every pawn flagged for removal, returning them in order.
    pub(crate) fn sweep(&mut self) -> Vec<PawnState> {
        let mut removed = Vec::new();
        while let Some(index) = self.pawns.iter().position(|pawn| pawn.pending_removal) {
            removed.push(self.pawns.remove(index).expect("index from position is valid"));
        }
        removed
    }
}
