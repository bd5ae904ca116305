//! Stock item catalog.
//!
//! The default definitions every scenario starts from. Lookup goes through
//! [`ItemOracle::definition`], a linear scan; the catalog is small and the
//! lookup path is cold.

use warren_core::{EffectKind, EquipKind, ItemDefinition, ItemOracle};

/// The built-in item catalog.
pub struct BuiltinItems {
    definitions: Vec<ItemDefinition>,
}

impl BuiltinItems {
    pub fn new() -> Self {
        Self {
            definitions: vec![
                ItemDefinition::new("healing_potion", "Healing Potion", 3)
                    .with_effect(EffectKind::Health, 4),
                ItemDefinition::new("venom_vial", "Venom Vial", 3)
                    .with_effect(EffectKind::Health, -3),
                ItemDefinition::new("battle_brew", "Battle Brew", 2)
                    .with_effect(EffectKind::DamageLasting, 2),
                ItemDefinition::new("troll_blood", "Troll Blood", 2)
                    .with_effect(EffectKind::HealthLasting, 1),
                ItemDefinition::new("heart_root", "Heart Root", 1)
                    .with_effect(EffectKind::HealthMax, 2),
                ItemDefinition::new("lucky_charm", "Lucky Charm", 1)
                    .with_effect(EffectKind::Luck, 1),
                ItemDefinition::new("ration", "Ration", 5),
                ItemDefinition::new("rusty_sword", "Rusty Sword", 1)
                    .with_equippable(EquipKind::Weapon),
                ItemDefinition::new("leather_vest", "Leather Vest", 1)
                    .with_equippable(EquipKind::Armor),
            ],
        }
    }
}

impl Default for BuiltinItems {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for BuiltinItems {
    fn definitions(&self) -> &[ItemDefinition] {
        &self.definitions
    }
}
