//! Action domain: the commands pawns execute during the Action phase.
//!
//! Every concrete action implements [`ActionTransition`] and is driven
//! through the same three-phase pipeline by the engine:
//! `pre_validate → apply → post_validate`.

pub mod inventory;
pub mod movement;
pub mod wait;

pub use inventory::{EquipAction, InventoryError, UseItemAction};
pub use movement::{MoveAction, MoveError, MoveOutcome, MoveTarget};
pub use wait::WaitAction;

use crate::env::GameEnv;
use crate::state::{EntityId, GameState};

/// Defines how a concrete action variant mutates game state.
///
/// Validation phases default to no-ops; `apply` carries the semantics.
pub trait ActionTransition {
    type Error;
    type Outcome;

    /// Returns the pawn performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum dispatched by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    UseItem(UseItemAction),
    Equip(EquipAction),
    Wait(WaitAction),
}

impl Action {
    /// Returns the pawn performing this action.
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Move(action) => action.actor,
            Action::UseItem(action) => action.actor,
            Action::Equip(action) => action.actor,
            Action::Wait(action) => action.actor,
        }
    }

    /// snake_case name used for logging and debug messages.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::UseItem(_) => "use_item",
            Action::Equip(_) => "equip",
            Action::Wait(_) => "wait",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<UseItemAction> for Action {
    fn from(action: UseItemAction) -> Self {
        Self::UseItem(action)
    }
}

impl From<EquipAction> for Action {
    fn from(action: EquipAction) -> Self {
        Self::Equip(action)
    }
}

impl From<WaitAction> for Action {
    fn from(action: WaitAction) -> Self {
        Self::Wait(action)
    }
}
