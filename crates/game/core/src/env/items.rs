use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::{EffectKind, EquipKind, Item, ItemEffect};

/// Read-only access to the default-item definitions.
///
/// Lookup is a linear scan over the definition list. O(n) by design: the
/// catalog is small and lookups happen on cold paths (spawning, granting),
/// never inside the per-turn loop.
pub trait ItemOracle: Send + Sync {
    /// Returns every definition this oracle knows about.
    fn definitions(&self) -> &[ItemDefinition];

    /// Looks up a prototype by name; `None` replaces the found-flag miss.
    fn definition(&self, name: &str) -> Option<&ItemDefinition> {
        self.definitions().iter().find(|def| def.name == name)
    }
}

/// Prototype an inventory [`Item`] is stamped from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub display_name: String,
    pub max_amount: u32,
    pub equippable: EquipKind,
    pub effects: ArrayVec<ItemEffect, { GameConfig::MAX_ITEM_EFFECTS }>,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, max_amount: u32) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            max_amount,
            equippable: EquipKind::None,
            effects: ArrayVec::new(),
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

    /// Stamps an item stack from this prototype, clamping to the stack max.
    pub fn instantiate(&self, amount: u32) -> Item {
        let mut item = Item::new(
            self.name.clone(),
            self.display_name.clone(),
            amount,
            self.max_amount,
        )
        .with_equippable(self.equippable);
        item.effects = self.effects.clone();
        item
    }
}
