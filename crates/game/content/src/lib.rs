//! Built-in game content.
//!
//! This crate houses the stock item catalog and pawn templates consumed by
//! runtime oracles. Content never appears in game state: the core references
//! it through the oracle traits, and external tooling may replace this crate
//! wholesale with data-driven definitions.

pub mod items;
pub mod pawns;

pub use items::BuiltinItems;
pub use pawns::{cave_wisp, giant_rat, player, rubble};
