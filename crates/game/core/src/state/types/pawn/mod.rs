//! Pawn state and the systems that live on it.
//!
//! This module contains everything specific to pawns:
//! - PawnState: stats, position, collision policy, lifecycle flag
//! - Inventory: bounded stack storage and the add/remove operations
//! - Equipment: armor/weapon slot indices
//! - Combat and the per-turn lasting-effect tick

pub mod equipment;
pub mod inventory;

use arrayvec::ArrayVec;

pub use equipment::Equipment;
pub use inventory::{AddOutcome, Inventory, RemoveOutcome};

use crate::config::GameConfig;
use crate::events::GameEvent;

use super::{EffectKind, EntityId, GridVec, LastingEffect};

pub type ActiveEffects = ArrayVec<LastingEffect, { GameConfig::MAX_ACTIVE_EFFECTS }>;

/// Collision policy for occupied cells: Overlap permits co-location with a
/// reaction, Block prevents movement, None neither blocks nor reacts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionPolicy {
    #[default]
    None,
    Overlap,
    Block,
}

/// Coarse allegiance tag consumed by external combat/AI logic.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    /// Unaligned scenery and critters.
    #[default]
    World,
    Player,
    Hostile,
    Neutral,
}

/// Stored combat stats. Lasting effects mutate these directly and reverse
/// themselves on expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PawnStats {
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub defence: i32,
}

impl PawnStats {
    pub fn new(max_health: i32, strength: i32, defence: i32) -> Self {
        Self {
            health: max_health,
            max_health,
            strength,
            defence,
        }
    }
}

impl Default for PawnStats {
    fn default() -> Self {
        Self::new(10, 1, 0)
    }
}

/// A simulated creature: stats, inventory, equipment, timed effects, and a
/// position on the grid.
///
/// Pawns hold no reference to the world; operations that touch the grid or
/// the registry run as engine actions over the whole game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PawnState {
    pub id: EntityId,
    pub position: GridVec,
    /// Character used by text renderers.
    pub glyph: char,
    pub faction: Faction,
    pub collision: CollisionPolicy,
    pub stats: PawnStats,
    pub inventory: Inventory,
    pub equipment: Equipment,
    /// Active lasting effects, ticked once per turn.
    pub effects: ActiveEffects,
    /// Set when the pawn dies; the world sweep removes flagged pawns.
    pub pending_removal: bool,
}

impl PawnState {
    pub fn new(id: EntityId, position: GridVec, glyph: char) -> Self {
        Self {
            id,
            position,
            glyph,
            faction: Faction::World,
            collision: CollisionPolicy::Block,
            stats: PawnStats::default(),
            inventory: Inventory::default(),
            equipment: Equipment::default(),
            effects: ActiveEffects::new(),
            pending_removal: false,
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

    /// Quick liveness check; flagged pawns are skipped by the turn loop
    /// until the sweep collects them.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.pending_removal
    }

    /// Applies incoming damage after defence mitigation.
    ///
    /// Effective damage is `max(0, damage - defence)`. Dropping to zero or
    /// below fires exactly one `Died` event (with `source` as attribution)
    /// and flags the pawn for removal. Returns the effective damage dealt
    /// regardless of death.
    pub fn receive_damage(
        &mut self,
        damage: i32,
        source: EntityId,
        events: &mut Vec<GameEvent>,
    ) -> i32 {
        let effective = (damage - self.stats.defence).max(0);
        self.stats.health -= effective;
        if self.stats.health <= 0 && !self.pending_removal {
            self.pending_removal = true;
            events.push(GameEvent::Died {
                victim: self.id,
                source,
            });
        }
        effective
    }

    /// Registers a lasting effect with the standard duration.
    ///
    /// Full sets silently drop the new effect; the bound is generous enough
    /// that this only guards against pathological item data.
    pub fn add_effect(&mut self, kind: EffectKind, amount: i32) {
        if !self.effects.is_full() {
            self.effects.push(LastingEffect::new(kind, amount));
        }
    }

    /// Applies every effect entry of the item in the given slot.
    ///
    /// Immediate kinds apply on the spot; lasting kinds register a
    /// [`LastingEffect`] instead. A negative `Health` value routes through
    /// [`Self::receive_damage`] so defence mitigation applies; positive
    /// values heal directly, unmitigated and unclamped. Consuming does not
    /// deplete the stack; quantity bookkeeping is the caller's concern.
    ///
    /// Out-of-range slots are a no-op returning `false`.
    pub fn consume_item(&mut self, slot: usize, events: &mut Vec<GameEvent>) -> bool {
        let Some(item) = self.inventory.item(slot) else {
            return false;
        };

        let effects = item.effects.clone();
        for entry in &effects {
            match entry.kind {
                // Data files encode strength loss as a positive value.
                EffectKind::Damage => self.stats.strength -= entry.value,
                EffectKind::Health => {
                    if entry.value < 0 {
                        self.receive_damage(-entry.value, self.id, events);
                    } else {
                        self.stats.health += entry.value;
                    }
                }
                EffectKind::HealthMax => self.stats.max_health += entry.value,
                EffectKind::DamageLasting | EffectKind::HealthLasting | EffectKind::Luck => {
                    self.add_effect(entry.kind, entry.value);
                }
            }
        }
        true
    }

    /// Per-turn lasting-effect tick.
    ///
    /// Effects are processed newest-first, matching the order expired
    /// entries historically vacated the list. `DamageLasting` applies its
    /// strength delta on the first tick and reverses it on the last, holding
    /// the modifier in between; `HealthLasting` adds its amount every tick,
    /// clamped to the maximum; `Luck` does nothing yet. Expired entries are
    /// compacted out after the pass.
    pub fn tick_effects(&mut self) {
        if self.effects.is_empty() {
            return;
        }

        for i in (0..self.effects.len()).rev() {
            let effect = self.effects[i];
            match effect.kind {
                EffectKind::DamageLasting => {
                    if effect.turns_left == GameConfig::LASTING_EFFECT_TURNS {
                        self.stats.strength += effect.amount;
                    } else if effect.turns_left == 1 {
                        self.stats.strength -= effect.amount;
                    }
                }
                EffectKind::HealthLasting => {
                    self.stats.health =
                        (self.stats.health + effect.amount).min(self.stats.max_health);
                }
                EffectKind::Luck => {}
                _ => {}
            }
            self.effects[i].turns_left -= 1;
        }

        self.effects.retain(|effect| effect.turns_left > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Item;

    fn pawn() -> PawnState {
        PawnState::new(EntityId(0), GridVec::ORIGIN, '@')
            .with_stats(PawnStats::new(20, 5, 2))
    }

    #[test]
    fn damage_below_defence_is_fully_mitigated() {
        let mut p = pawn();
        let mut events = Vec::new();

        let dealt = p.receive_damage(2, EntityId(9), &mut events);

        assert_eq!(dealt, 0);
        assert_eq!(p.stats.health, 20);
        assert!(events.is_empty());
    }

    #[test]
    fn damage_above_defence_applies_the_difference() {
        let mut p = pawn();
        let mut events = Vec::new();

        let dealt = p.receive_damage(7, EntityId(9), &mut events);

        assert_eq!(dealt, 5);
        assert_eq!(p.stats.health, 15);
    }

    #[test]
    fn lethal_damage_fires_exactly_one_death_event() {
        let mut p = pawn();
        let mut events = Vec::new();

        p.receive_damage(100, EntityId(9), &mut events);
        p.receive_damage(100, EntityId(9), &mut events);

        let deaths: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Died { .. }))
            .collect();
        assert_eq!(deaths.len(), 1);
        assert_eq!(
            deaths[0],
            &GameEvent::Died {
                victim: EntityId(0),
                source: EntityId(9),
            }
        );
        assert!(!p.is_alive());
    }

    #[test]
    fn lasting_damage_effect_nets_to_zero_over_its_lifetime() {
        let mut p = pawn();
        let base = p.stats.strength;
        p.add_effect(EffectKind::DamageLasting, 3);

        p.tick_effects();
        assert_eq!(p.stats.strength, base + 3, "applied on first tick");

        for _ in 0..3 {
            p.tick_effects();
            assert_eq!(p.stats.strength, base + 3, "held, not reapplied");
        }

        p.tick_effects();
        assert_eq!(p.stats.strength, base, "reversed on last tick");
        assert!(p.effects.is_empty());
    }

    #[test]
    fn lasting_health_effect_heals_each_tick_clamped_to_max() {
        let mut p = pawn();
        let mut events = Vec::new();
        p.receive_damage(9, EntityId(9), &mut events); // 20 -> 13
        p.add_effect(EffectKind::HealthLasting, 4);

        p.tick_effects();
        assert_eq!(p.stats.health, 17);
        p.tick_effects();
        assert_eq!(p.stats.health, 20, "clamped to max_health");
        for _ in 0..3 {
            p.tick_effects();
        }
        assert_eq!(p.stats.health, 20);
        assert!(p.effects.is_empty());
    }

    #[test]
    fn luck_effect_expires_without_touching_stats() {
        let mut p = pawn();
        let stats = p.stats;
        p.add_effect(EffectKind::Luck, 2);

        for _ in 0..GameConfig::LASTING_EFFECT_TURNS {
            p.tick_effects();
        }

        assert_eq!(p.stats, stats);
        assert!(p.effects.is_empty());
    }

    #[test]
    fn consume_applies_immediate_effects_and_registers_lasting_ones() {
        let mut p = pawn();
        let mut events = Vec::new();
        let brew = Item::new("battle_brew", "Battle Brew", 1, 3)
            .with_effect(EffectKind::Damage, 1)
            .with_effect(EffectKind::HealthMax, 5)
            .with_effect(EffectKind::DamageLasting, 2);
        let outcome = p.add_item(brew, false, &mut events);
        assert!(outcome.fully_added());

        assert!(p.consume_item(0, &mut events));

        assert_eq!(p.stats.strength, 4, "immediate damage lowers strength");
        assert_eq!(p.stats.max_health, 25);
        assert_eq!(p.effects.len(), 1);
        assert_eq!(p.effects[0].turns_left, GameConfig::LASTING_EFFECT_TURNS);
        // The stack itself is untouched; depletion is the caller's concern.
        assert_eq!(p.inventory.item(0).unwrap().current_amount, 1);
    }

    #[test]
    fn consume_routes_negative_health_through_defence() {
        let mut p = pawn();
        let mut events = Vec::new();
        let vial = Item::new("venom_vial", "Venom Vial", 1, 1)
            .with_effect(EffectKind::Health, -6);
        p.add_item(vial, false, &mut events);

        p.consume_item(0, &mut events);

        // 6 damage mitigated by 2 defence.
        assert_eq!(p.stats.health, 16);
    }

    #[test]
    fn consume_positive_health_heals_unmitigated() {
        let mut p = pawn();
        let mut events = Vec::new();
        p.receive_damage(7, EntityId(9), &mut events); // 20 -> 15
        let potion = Item::new("healing_potion", "Healing Potion", 1, 5)
            .with_effect(EffectKind::Health, 4);
        p.add_item(potion, false, &mut events);

        p.consume_item(0, &mut events);

        assert_eq!(p.stats.health, 19);
    }

    #[test]
    fn consume_out_of_range_slot_is_a_no_op() {
        let mut p = pawn();
        let mut events = Vec::new();
        let stats = p.stats;

        assert!(!p.consume_item(3, &mut events));

        assert_eq!(p.stats, stats);
        assert!(events.is_empty());
    }
}
