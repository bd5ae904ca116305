//! Equipment slots for pawns.
//!
//! Slots hold *indices* into the pawn's inventory. Equipping overwrites the
//! slot with no unequip side effects: the previous item simply stops being
//! referenced as equipped and stays in the inventory.

use crate::events::GameEvent;
use crate::state::types::EquipKind;

use super::PawnState;

/// Equipped-slot indices for an actor; `None` replaces the unset sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Inventory slot of the equipped armor, if any.
    pub armor: Option<usize>,
    /// Inventory slot of the equipped weapon, if any.
    pub weapon: Option<usize>,
}

impl Equipment {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips armor by inventory slot, returning the previous slot if any.
    pub fn equip_armor(&mut self, slot: usize) -> Option<usize> {
        self.armor.replace(slot)
    }

    /// Equips a weapon by inventory slot, returning the previous slot if any.
    pub fn equip_weapon(&mut self, slot: usize) -> Option<usize> {
        self.weapon.replace(slot)
    }
}

impl PawnState {
    /// Places the item at `slot` into the equip slot its kind selects.
    ///
    /// Out-of-range slots and non-equippable items are a no-op returning
    /// `false`. Fires `Equipped` on success.
    pub fn equip_item(&mut self, slot: usize, events: &mut Vec<GameEvent>) -> bool {
        let Some(item) = self.inventory.item(slot) else {
            return false;
        };

        let kind = item.equippable;
        match kind {
            EquipKind::Armor => {
                let _previous = self.equipment.equip_armor(slot);
            }
            EquipKind::Weapon => {
                let _previous = self.equipment.equip_weapon(slot);
            }
            EquipKind::None => return false,
        }

        events.push(GameEvent::Equipped {
            pawn: self.id,
            kind,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityId, GridVec, Item};

    fn pawn_with(items: Vec<Item>) -> PawnState {
        let mut p = PawnState::new(EntityId(0), GridVec::ORIGIN, '@');
        let mut events = Vec::new();
        for item in items {
            assert!(p.add_item(item, false, &mut events).fully_added());
        }
        p
    }

    #[test]
    fn equip_overwrites_the_slot_without_unequip_side_effects() {
        let mut p = pawn_with(vec![
            Item::new("leather_vest", "Leather Vest", 1, 1).with_equippable(EquipKind::Armor),
            Item::new("iron_mail", "Iron Mail", 1, 1).with_equippable(EquipKind::Armor),
        ]);
        let mut events = Vec::new();

        assert!(p.equip_item(0, &mut events));
        assert!(p.equip_item(1, &mut events));

        assert_eq!(p.equipment.armor, Some(1));
        // The old armor is still in the inventory, just no longer equipped.
        assert_eq!(p.inventory.item(0).unwrap().name, "leather_vest");
        assert_eq!(p.inventory.len(), 2);
    }

    #[test]
    fn weapon_and_armor_use_separate_slots() {
        let mut p = pawn_with(vec![
            Item::new("rusty_sword", "Rusty Sword", 1, 1).with_equippable(EquipKind::Weapon),
            Item::new("leather_vest", "Leather Vest", 1, 1).with_equippable(EquipKind::Armor),
        ]);
        let mut events = Vec::new();

        p.equip_item(0, &mut events);
        p.equip_item(1, &mut events);

        assert_eq!(p.equipment.weapon, Some(0));
        assert_eq!(p.equipment.armor, Some(1));
    }

    #[test]
    fn non_equippable_and_out_of_range_are_no_ops() {
        let mut p = pawn_with(vec![Item::new("ration", "Ration", 1, 5)]);
        let mut events = Vec::new();

        assert!(!p.equip_item(0, &mut events));
        assert!(!p.equip_item(7, &mut events));

        assert_eq!(p.equipment, Equipment::empty());
        assert!(events.is_empty());
    }
}
