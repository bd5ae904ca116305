//! State types shared by the engine, actions, and runtime layers.

pub mod cell;
pub mod common;
pub mod effect;
pub mod entities;
pub mod item;
pub mod pawn;
pub mod turn;
pub mod world;

pub use cell::{Cell, CellGrid};
pub use common::{EntityId, GridVec};
pub use effect::LastingEffect;
pub use entities::EntitiesState;
pub use item::{EffectKind, EquipKind, Item, ItemEffect, ItemEffects};
pub use pawn::{
    ActiveEffects, AddOutcome, CollisionPolicy, Equipment, Faction, Inventory, PawnState,
    PawnStats, RemoveOutcome,
};
pub use turn::{TurnPhase, TurnState};
pub use world::WorldState;
