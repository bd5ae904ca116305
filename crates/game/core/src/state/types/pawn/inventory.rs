//! Bounded stack storage and the inventory operations on pawns.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::state::types::Item;

use super::PawnState;

/// Bounded per-pawn item storage; the const capacity is `MaxItems`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Bounds-checked slot lookup; `None` replaces the not-found sentinel.
    pub fn item(&self, slot: usize) -> Option<&Item> {
        self.items.get(slot)
    }

    /// Linear scan by stack name; returns the first match with its slot.
    pub fn item_by_name(&self, name: &str) -> Option<(usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Total units held across all stacks of `name`.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.items
            .iter()
            .filter(|item| item.name == name)
            .map(|item| item.current_amount)
            .sum()
    }
}

/// Result of [`PawnState::add_item`]. `leftover` is the amount that found
/// no room; `new_slot` is set when a fresh stack was created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddOutcome {
    pub leftover: u32,
    pub new_slot: Option<usize>,
}

impl AddOutcome {
    pub fn fully_added(&self) -> bool {
        self.leftover == 0
    }
}

/// Result of [`PawnState::remove_item`]. `leftover` is the amount that was
/// requested but not held; callers inspect it rather than a success flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub leftover: u32,
}

impl RemoveOutcome {
    pub fn fully_removed(&self) -> bool {
        self.leftover == 0
    }
}

impl PawnState {
    /// Adds an item to the inventory, merging into existing stacks first.
    ///
    /// Stacks of the same name are topped up greedily front-to-back; any
    /// remainder opens a new stack if a slot is free. When the inventory is
    /// at capacity the unplaced amount is reported in the outcome: partial
    /// failure is reported, not retried or rolled back. Each touched stack
    /// fires `ItemCountChanged`; a new stack fires `ItemAdded` and, with
    /// `auto_equip`, is equipped immediately.
    pub fn add_item(
        &mut self,
        item: Item,
        auto_equip: bool,
        events: &mut Vec<GameEvent>,
    ) -> AddOutcome {
        let mut leftover = item.current_amount;

        for slot in 0..self.inventory.items.len() {
            if leftover == 0 {
                break;
            }
            let stack = &mut self.inventory.items[slot];
            if stack.name != item.name || stack.space_left() == 0 {
                continue;
            }
            let moved = leftover.min(stack.space_left());
            stack.current_amount += moved;
            leftover -= moved;
            events.push(GameEvent::ItemCountChanged {
                pawn: self.id,
                slot,
            });
        }

        let mut new_slot = None;
        if leftover > 0 && !self.inventory.is_full() {
            let slot = self.inventory.items.len();
            let mut stack = item;
            // leftover <= current_amount <= max_amount, so one stack holds it
            stack.current_amount = leftover;
            leftover = 0;
            events.push(GameEvent::ItemAdded {
                pawn: self.id,
                display_name: stack.display_name.clone(),
                slot,
            });
            self.inventory.items.push(stack);
            new_slot = Some(slot);
            if auto_equip {
                self.equip_item(slot, events);
            }
        }

        AddOutcome { leftover, new_slot }
    }

    /// Removes up to `amount` units of `name`, draining stacks front-to-back.
    ///
    /// Emptied stacks are deleted in a back-to-front compaction pass so no
    /// index is skipped while slots shift; each deletion fires `ItemRemoved`.
    /// The outcome's `leftover` reports how much of the request was not held.
    pub fn remove_item(
        &mut self,
        name: &str,
        amount: u32,
        events: &mut Vec<GameEvent>,
    ) -> RemoveOutcome {
        if amount == 0 {
            return RemoveOutcome { leftover: 0 };
        }

        let mut leftover = amount;
        for slot in 0..self.inventory.items.len() {
            if leftover == 0 {
                break;
            }
            let stack = &mut self.inventory.items[slot];
            if stack.name != name {
                continue;
            }
            let taken = leftover.min(stack.current_amount);
            stack.current_amount -= taken;
            leftover -= taken;
            events.push(GameEvent::ItemCountChanged {
                pawn: self.id,
                slot,
            });
        }

        for slot in (0..self.inventory.items.len()).rev() {
            if self.inventory.items[slot].current_amount == 0 {
                let removed = self.inventory.items.remove(slot);
                events.push(GameEvent::ItemRemoved {
                    pawn: self.id,
                    name: removed.name,
                    slot,
                });
            }
        }

        RemoveOutcome { leftover }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityId, EquipKind, GridVec};

    fn pawn() -> PawnState {
        PawnState::new(EntityId(0), GridVec::ORIGIN, '@')
    }

    fn ration(amount: u32) -> Item {
        Item::new("ration", "Ration", amount, 5)
    }

    #[test]
    fn added_minus_leftover_equals_stored_increase() {
        let mut p = pawn();
        let mut events = Vec::new();

        let before = p.inventory.quantity_of("ration");
        let outcome = p.add_item(ration(4), false, &mut events);
        let outcome2 = p.add_item(ration(3), false, &mut events);
        let after = p.inventory.quantity_of("ration");

        let added = 4 + 3;
        let leftover = outcome.leftover + outcome2.leftover;
        assert_eq!(added - leftover, after - before);
        assert_eq!(after, 7);
        assert_eq!(p.inventory.len(), 2, "4 topped to 5, remainder opens a stack");
    }

    #[test]
    fn merge_tops_up_existing_stack_before_opening_a_new_one() {
        let mut p = pawn();
        let mut events = Vec::new();
        p.add_item(ration(3), false, &mut events);

        events.clear();
        let outcome = p.add_item(ration(2), false, &mut events);

        assert!(outcome.fully_added());
        assert_eq!(outcome.new_slot, None);
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(p.inventory.item(0).unwrap().current_amount, 5);
        assert_eq!(
            events,
            vec![GameEvent::ItemCountChanged {
                pawn: EntityId(0),
                slot: 0,
            }]
        );
    }

    #[test]
    fn full_inventory_reports_leftover() {
        let mut p = pawn();
        let mut events = Vec::new();
        for i in 0..GameConfig::MAX_INVENTORY_SLOTS {
            let name = format!("junk{i}");
            let outcome = p.add_item(Item::new(&name, &name, 1, 1), false, &mut events);
            assert!(outcome.fully_added());
        }
        assert!(p.inventory.is_full());

        let outcome = p.add_item(ration(4), false, &mut events);

        assert_eq!(outcome.leftover, 4);
        assert!(!outcome.fully_added());
        assert_eq!(outcome.new_slot, None);
        assert_eq!(p.inventory.len(), GameConfig::MAX_INVENTORY_SLOTS);
    }

    #[test]
    fn overflow_into_full_stacks_lands_in_leftover() {
        let mut p = pawn();
        let mut events = Vec::new();
        for i in 0..GameConfig::MAX_INVENTORY_SLOTS - 1 {
            let name = format!("junk{i}");
            p.add_item(Item::new(&name, &name, 1, 1), false, &mut events);
        }
        p.add_item(ration(5), false, &mut events);
        assert!(p.inventory.is_full());

        // Existing ration stack is full, so nothing can be absorbed.
        let outcome = p.add_item(ration(2), false, &mut events);

        assert_eq!(outcome.leftover, 2);
        assert_eq!(p.inventory.quantity_of("ration"), 5);
    }

    #[test]
    fn new_stack_fires_item_added_and_can_auto_equip() {
        let mut p = pawn();
        let mut events = Vec::new();
        let sword = Item::new("rusty_sword", "Rusty Sword", 1, 1)
            .with_equippable(EquipKind::Weapon);

        let outcome = p.add_item(sword, true, &mut events);

        assert_eq!(outcome.new_slot, Some(0));
        assert_eq!(p.equipment.weapon, Some(0));
        assert!(events.contains(&GameEvent::ItemAdded {
            pawn: EntityId(0),
            display_name: "Rusty Sword".into(),
            slot: 0,
        }));
        assert!(events.contains(&GameEvent::Equipped {
            pawn: EntityId(0),
            kind: EquipKind::Weapon,
        }));
    }

    #[test]
    fn remove_across_two_stacks_deletes_both_without_skipping() {
        let mut p = pawn();
        let mut events = Vec::new();
        p.add_item(ration(5), false, &mut events);
        p.add_item(ration(5), false, &mut events);
        assert_eq!(p.inventory.len(), 2);

        events.clear();
        let outcome = p.remove_item("ration", 12, &mut events);

        assert_eq!(outcome.leftover, 2);
        assert!(p.inventory.is_empty());
        let removed: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ItemRemoved { .. }))
            .collect();
        assert_eq!(removed.len(), 2, "both emptied stacks are deleted");
    }

    #[test]
    fn partial_remove_keeps_the_stack() {
        let mut p = pawn();
        let mut events = Vec::new();
        p.add_item(ration(5), false, &mut events);

        events.clear();
        let outcome = p.remove_item("ration", 2, &mut events);

        assert!(outcome.fully_removed());
        assert_eq!(p.inventory.item(0).unwrap().current_amount, 3);
        assert_eq!(
            events,
            vec![GameEvent::ItemCountChanged {
                pawn: EntityId(0),
                slot: 0,
            }]
        );
    }

    #[test]
    fn remove_zero_is_a_no_op() {
        let mut p = pawn();
        let mut events = Vec::new();
        p.add_item(ration(5), false, &mut events);

        events.clear();
        let outcome = p.remove_item("ration", 0, &mut events);

        assert_eq!(outcome.leftover, 0);
        assert!(events.is_empty());
        assert_eq!(p.inventory.quantity_of("ration"), 5);
    }

    #[test]
    fn lookup_by_name_and_slot() {
        let mut p = pawn();
        let mut events = Vec::new();
        p.add_item(ration(2), false, &mut events);

        assert_eq!(p.inventory.item_by_name("ration").unwrap().0, 0);
        assert!(p.inventory.item_by_name("ambrosia").is_none());
        assert!(p.inventory.item(0).is_some());
        assert!(p.inventory.item(5).is_none());
    }
}
