//! Deterministic dungeon-crawl simulation core.
//!
//! `warren-core` defines the canonical rules (actions, engine, world state)
//! and exposes pure APIs reused by the runtime and offline tools. All state
//! mutation flows through [`engine::GameEngine`], and supporting crates
//! depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod events;
pub mod state;

pub use action::{
    Action, ActionTransition, EquipAction, InventoryError, MoveAction, MoveError, MoveOutcome,
    MoveTarget, UseItemAction, WaitAction,
};
pub use config::GameConfig;
pub use engine::{
    ActionResult, ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, TurnReport,
};
pub use env::{Env, GameEnv, ItemDefinition, ItemOracle, OracleError, PawnTemplate};
pub use events::GameEvent;
pub use state::{
    AddOutcome, Cell, CellGrid, CollisionPolicy, EffectKind, EntitiesState, EntityId, EquipKind,
    Equipment, Faction, GameState, GridVec, Inventory, Item, ItemEffect, LastingEffect, PawnState,
    PawnStats, RemoveOutcome, SpawnError, TurnPhase, TurnState, WorldState,
};
