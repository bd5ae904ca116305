//! Item and item-effect state types.
//!
//! An inventory stack IS an [`Item`] instance; the prototype it was stamped
//! from lives behind [`crate::env::ItemOracle`].

use arrayvec::ArrayVec;

use crate::config::GameConfig;

pub type ItemEffects = ArrayVec<ItemEffect, { GameConfig::MAX_ITEM_EFFECTS }>;

/// What an item does when consumed.
///
/// `Damage` and `HealthMax` carry inverted/plain signs matching the data
/// files: a positive `Damage` value lowers strength, a positive `HealthMax`
/// value raises the cap.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectKind {
    /// Immediate strength reduction.
    Damage,
    /// Strength modifier applied once and held for the effect's lifetime.
    DamageLasting,
    /// Immediate health change; negative values route through the damage path.
    Health,
    /// Per-turn health change, clamped to the maximum.
    HealthLasting,
    /// Immediate maximum-health change.
    HealthMax,
    /// Timed luck modifier; currently a placeholder.
    Luck,
}

impl EffectKind {
    /// Lasting kinds register a timed effect instead of applying immediately.
    pub fn is_lasting(self) -> bool {
        matches!(
            self,
            EffectKind::DamageLasting | EffectKind::HealthLasting | EffectKind::Luck
        )
    }
}

/// One entry in an item's ordered effect sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEffect {
    pub kind: EffectKind,
    pub value: i32,
}

impl ItemEffect {
    pub fn new(kind: EffectKind, value: i32) -> Self {
        Self { kind, value }
    }
}

/// Which single equip slot an item occupies, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipKind {
    #[default]
    None,
    Armor,
    Weapon,
}

/// An item stack held in an inventory.
///
/// Invariant: `current_amount <= max_amount`. `Item::new` clamps and the
/// inventory code preserves it on every mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identity used for stacking and lookups.
    pub name: String,
    /// Human-facing name surfaced by notifications.
    pub display_name: String,
    pub current_amount: u32,
    pub max_amount: u32,
    pub equippable: EquipKind,
    pub effects: ItemEffects,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        current_amount: u32,
        max_amount: u32,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            current_amount: current_amount.min(max_amount),
            max_amount,
            equippable: EquipKind::None,
            effects: ItemEffects::new(),
        }
    }

    pub fn with_equippable(mut self, equippable: EquipKind) -> Self {
        self.equippable = equippable;
        self
    }

    /// Appends an effect entry; full effect lists drop the extra entry.
    pub fn with_effect(mut self, kind: EffectKind, value: i32) -> Self {
        if !self.effects.is_full() {
            self.effects.push(ItemEffect::new(kind, value));
        }
        self
    }

    /// Units this stack can still absorb.
    pub fn space_left(&self) -> u32 {
        self.max_amount - self.current_amount
    }
}
