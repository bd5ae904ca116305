//! Synchronous session driver for the simulation core.
//!
//! The runtime owns a [`warren_core::GameState`] plus the oracle
//! implementations, feeds queued commands through the engine once per turn,
//! and surfaces the resulting [`warren_core::TurnReport`] to the UI layer.
//! Everything here is blocking and single-threaded; the core guarantees the
//! Input → Action → EffectsTick ordering within each turn.

mod session;

pub use session::{Session, SessionError};
