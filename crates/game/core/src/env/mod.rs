//! Traits describing read-only world data.
//!
//! Oracles expose item prototypes and pawn templates. The [`Env`] aggregate
//! bundles them so the engine can reach everything it needs without hard
//! coupling to concrete implementations.

mod items;
mod pawns;

pub use items::{ItemDefinition, ItemOracle};
pub use pawns::PawnTemplate;

/// Errors surfaced when a required oracle was not provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("item oracle not available")]
    ItemsNotAvailable,
}

/// Aggregates read-only oracles required by the action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, I>
where
    I: ItemOracle + ?Sized,
{
    items: Option<&'a I>,
}

/// Trait-object form used across the engine boundary.
pub type GameEnv<'a> = Env<'a, dyn ItemOracle + 'a>;

impl<'a, I> Env<'a, I>
where
    I: ItemOracle + ?Sized,
{
    pub fn new(items: Option<&'a I>) -> Self {
        Self { items }
    }

    pub fn with_items(items: &'a I) -> Self {
        Self::new(Some(items))
    }

    pub fn empty() -> Self {
        Self { items: None }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no items oracle was
    /// provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }
}

impl<'a, I> Env<'a, I>
where
    I: ItemOracle + 'a,
{
    /// Converts this environment into the trait-object based [`GameEnv`].
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        Env::new(items)
    }
}
