//! Authoritative game state representation.
//!
//! This module owns the data structures that describe pawns, the occupancy
//! grid, and turn bookkeeping. Collaborators read this state freely but
//! mutate it exclusively through the engine's action pipeline.

pub mod types;

pub use types::{
    ActiveEffects, AddOutcome, Cell, CellGrid, CollisionPolicy, EffectKind, EntitiesState,
    EntityId, EquipKind, Equipment, Faction, GridVec, Inventory, Item, ItemEffect, ItemEffects,
    LastingEffect, PawnState, PawnStats, RemoveOutcome, TurnPhase, TurnState, WorldState,
};

use crate::config::GameConfig;
use crate::env::PawnTemplate;
use crate::events::GameEvent;

/// Errors surfaced by the spawn facility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("pawn registry is full")]
    RegistryFull,
}

/// Canonical snapshot of the simulation state.
///
/// Singly-owned; the engine borrows it mutably for the duration of a turn.
/// There is exactly one logical thread of control, so no locking discipline
/// exists anywhere in the core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Sequential entity id allocator; never reused within a session.
    next_entity_id: u32,

    pub config: GameConfig,
    /// Turn counter and the phase currently executing.
    pub turn: TurnState,
    /// Every live pawn, in spawn order.
    pub entities: EntitiesState,
    /// The occupancy grid.
    pub world: WorldState,

    /// Notifications buffered during the turn; drained into the turn report.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) events: Vec<GameEvent>,

    /// Debug messages buffered for the external sink; cleared each drain.
    #[cfg_attr(feature = "serde", serde(skip))]
    debug_messages: Vec<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            next_entity_id: 0,
            config,
            turn: TurnState::new(),
            entities: EntitiesState::default(),
            world: WorldState::default(),
            events: Vec::new(),
            debug_messages: Vec::new(),
        }
    }

    /// Allocates the next sequential entity id.
    fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    /// Spawns a pawn from a template at `position`.
    ///
    /// Assigns a fresh id, appends to the registry in insertion order, and
    /// stamps the spawn cell the same way movement stamps a destination:
    /// `occupied` reflects the pawn's own collision policy.
    pub fn spawn_pawn(
        &mut self,
        template: &PawnTemplate,
        position: GridVec,
    ) -> Result<EntityId, SpawnError> {
        let id = self.allocate_entity_id();
        let pawn = template.to_pawn(id, position);
        let collision = pawn.collision;

        self.entities
            .push(pawn)
            .map_err(|_| SpawnError::RegistryFull)?;

        self.world.set_cell(
            position,
            Cell {
                location: position,
                occupied: collision == CollisionPolicy::Block,
                occupant: Some(id),
            },
        );

        Ok(id)
    }

    /// Removes every pawn flagged for removal and returns how many went.
    ///
    /// A dead pawn's cell is cleared only if it still names the pawn as
    /// occupant; a later arrival that overwrote the cell is left alone.
    pub fn sweep_removed(&mut self) -> usize {
        let removed = self.entities.sweep();
        for pawn in &removed {
            let cell = self.world.cell(pawn.position);
            if cell.occupant == Some(pawn.id) {
                self.world.set_cell(pawn.position, Cell::empty(pawn.position));
            }
        }
        removed.len()
    }

    /// Adds an item to a pawn's inventory, buffering the notifications.
    ///
    /// Returns `None` for absent or dead pawns; otherwise the add outcome,
    /// whose `leftover` reports what found no room.
    pub fn give_item(&mut self, pawn: EntityId, item: Item, auto_equip: bool) -> Option<AddOutcome> {
        let events = &mut self.events;
        self.entities
            .pawn_mut(pawn)
            .filter(|pawn| pawn.is_alive())
            .map(|pawn| pawn.add_item(item, auto_equip, events))
    }

    /// Removes up to `amount` units of `name` from a pawn's inventory.
    ///
    /// Returns `None` for absent or dead pawns; callers inspect the
    /// outcome's `leftover`, not a success flag.
    pub fn take_item(&mut self, pawn: EntityId, name: &str, amount: u32) -> Option<RemoveOutcome> {
        let events = &mut self.events;
        self.entities
            .pawn_mut(pawn)
            .filter(|pawn| pawn.is_alive())
            .map(|pawn| pawn.remove_item(name, amount, events))
    }

    /// Routes damage to a pawn through defence mitigation.
    ///
    /// Returns the effective damage dealt, or `None` if the target does not
    /// resolve. Death marks the target for the end-of-turn sweep.
    pub fn deal_damage(&mut self, target: EntityId, damage: i32, source: EntityId) -> Option<i32> {
        let events = &mut self.events;
        self.entities
            .pawn_mut(target)
            .filter(|pawn| pawn.is_alive())
            .map(|pawn| pawn.receive_damage(damage, source, events))
    }

    /// Queues a message for the external debug sink, honoring the
    /// configured bound. Excess messages are dropped.
    pub fn add_debug_message(&mut self, message: impl Into<String>) {
        if let Some(max) = self.config.max_debug_messages {
            if self.debug_messages.len() >= max {
                return;
            }
        }
        self.debug_messages.push(message.into());
    }

    /// Hands the buffered debug messages to the caller, clearing the buffer.
    pub fn drain_debug_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.debug_messages)
    }

    /// Hands the buffered events to the caller, clearing the buffer.
    pub(crate) fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
