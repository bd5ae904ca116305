use crate::config::GameConfig;

use super::EffectKind;

/// A timed, multi-turn status modifier distinct from an instantaneous item
/// effect.
///
/// Created when an item with a lasting effect is consumed; removed once
/// `turns_left` reaches zero after decrement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastingEffect {
    /// One of the lasting kinds (`DamageLasting`, `HealthLasting`, `Luck`).
    pub kind: EffectKind,
    pub amount: i32,
    pub turns_left: u32,
}

impl LastingEffect {
    pub fn new(kind: EffectKind, amount: i32) -> Self {
        Self {
            kind,
            amount,
            turns_left: GameConfig::LASTING_EFFECT_TURNS,
        }
    }
}
