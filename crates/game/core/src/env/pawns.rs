//! Pawn template definitions.
//!
//! Templates define every [`PawnState`] field except id and position, so
//! content crates can describe creatures in a data-driven way and the spawn
//! facility stamps instances from them.

use crate::state::{CollisionPolicy, EntityId, Faction, GridVec, PawnState, PawnStats};

/// Blueprint for spawning a pawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PawnTemplate {
    pub glyph: char,
    pub faction: Faction,
    pub collision: CollisionPolicy,
    pub stats: PawnStats,
}

impl PawnTemplate {
    pub fn new(glyph: char) -> Self {
        Self {
            glyph,
            faction: Faction::World,
            collision: CollisionPolicy::Block,
            stats: PawnStats::default(),
        }
    }

    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }

    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_stats(mut self, stats: PawnStats) -> Self {
        self.stats = stats;
        self
    }

    /// Creates a pawn from this template with the given id and position.
    pub fn to_pawn(&self, id: EntityId, position: GridVec) -> PawnState {
        PawnState::new(id, position, self.glyph)
            .with_faction(self.faction)
            .with_collision(self.collision)
            .with_stats(self.stats)
    }
}
