use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::state::{EntityId, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("pawn {0} not found")]
    PawnNotFound(EntityId),

    #[error("inventory slot {slot} out of bounds")]
    SlotOutOfBounds { slot: usize },
}

/// Consumes the item in the given inventory slot, applying its effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: EntityId,
    pub slot: usize,
}

impl UseItemAction {
    pub fn new(actor: EntityId, slot: usize) -> Self {
        Self { actor, slot }
    }
}

impl ActionTransition for UseItemAction {
    type Error = InventoryError;
    type Outcome = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let pawn = state
            .entities
            .pawn(self.actor)
            .filter(|pawn| pawn.is_alive())
            .ok_or(InventoryError::PawnNotFound(self.actor))?;
        pawn.inventory
            .item(self.slot)
            .map(|_| ())
            .ok_or(InventoryError::SlotOutOfBounds { slot: self.slot })
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let events = &mut state.events;
        let pawn = state
            .entities
            .pawn_mut(self.actor)
            .ok_or(InventoryError::PawnNotFound(self.actor))?;
        if !pawn.consume_item(self.slot, events) {
            return Err(InventoryError::SlotOutOfBounds { slot: self.slot });
        }
        Ok(())
    }
}

/// Equips the item in the given inventory slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub actor: EntityId,
    pub slot: usize,
}

impl EquipAction {
    pub fn new(actor: EntityId, slot: usize) -> Self {
        Self { actor, slot }
    }
}

impl ActionTransition for EquipAction {
    type Error = InventoryError;
    type Outcome = bool;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let pawn = state
            .entities
            .pawn(self.actor)
            .filter(|pawn| pawn.is_alive())
            .ok_or(InventoryError::PawnNotFound(self.actor))?;
        pawn.inventory
            .item(self.slot)
            .map(|_| ())
            .ok_or(InventoryError::SlotOutOfBounds { slot: self.slot })
    }

    /// Returns whether anything was equipped; a non-equippable item is a
    /// successful no-op, not an error.
    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<bool, Self::Error> {
        let events = &mut state.events;
        let pawn = state
            .entities
            .pawn_mut(self.actor)
            .ok_or(InventoryError::PawnNotFound(self.actor))?;
        Ok(pawn.equip_item(self.slot, events))
    }
}
