//! Stock pawn templates.

use warren_core::{CollisionPolicy, Faction, PawnStats, PawnTemplate};

/// The controllable player character.
pub fn player() -> PawnTemplate {
    PawnTemplate::new('@')
        .with_faction(Faction::Player)
        .with_collision(CollisionPolicy::Block)
        .with_stats(PawnStats::new(20, 5, 2))
}

/// A basic hostile creature.
pub fn giant_rat() -> PawnTemplate {
    PawnTemplate::new('r')
        .with_faction(Faction::Hostile)
        .with_collision(CollisionPolicy::Block)
        .with_stats(PawnStats::new(6, 2, 0))
}

/// Harmless floating light; walking into it triggers its overlap reaction.
pub fn cave_wisp() -> PawnTemplate {
    PawnTemplate::new('*')
        .with_faction(Faction::Neutral)
        .with_collision(CollisionPolicy::Overlap)
        .with_stats(PawnStats::new(1, 0, 0))
}

/// Impassable debris.
pub fn rubble() -> PawnTemplate {
    PawnTemplate::new('#')
        .with_faction(Faction::World)
        .with_collision(CollisionPolicy::Block)
        .with_stats(PawnStats::new(1, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::{EntityId, GridVec};

    #[test]
    fn templates_stamp_pawns_with_their_policies() {
        let wisp = cave_wisp().to_pawn(EntityId(3), GridVec::new(1, 2));

        assert_eq!(wisp.id, EntityId(3));
        assert_eq!(wisp.collision, CollisionPolicy::Overlap);
        assert_eq!(wisp.faction, Faction::Neutral);
        assert_eq!(wisp.stats.health, 1);
    }
}
