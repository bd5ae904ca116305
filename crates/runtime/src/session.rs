use warren_core::{
    Action, AddOutcome, Env, EntityId, GameConfig, GameEngine, GameEvent, GameState, GridVec,
    ItemOracle, OracleError, PawnTemplate, RemoveOutcome, SpawnError, TurnReport,
};
use warren_content::BuiltinItems;

/// Errors surfaced by session-level operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("unknown item definition '{0}'")]
    UnknownItem(String),

    #[error("pawn {0} not found")]
    PawnNotFound(EntityId),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// A running game: state, oracles, and the per-turn command queue.
///
/// Commands accumulate between turns; [`Session::step`] flushes them through
/// the engine, logs what happened, and hands back the turn report.
pub struct Session<I: ItemOracle> {
    state: GameState,
    items: I,
    pending: Vec<Action>,
}

impl Session<BuiltinItems> {
    /// A session over the built-in content catalog.
    pub fn with_builtin_items() -> Self {
        Self::new(GameConfig::default(), BuiltinItems::new())
    }
}

impl<I: ItemOracle> Session<I> {
    pub fn new(config: GameConfig, items: I) -> Self {
        Self {
            state: GameState::new(config),
            items,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn items(&self) -> &I {
        &self.items
    }

    /// Spawns a pawn and logs its arrival.
    pub fn spawn(
        &mut self,
        template: &PawnTemplate,
        position: GridVec,
    ) -> Result<EntityId, SessionError> {
        let id = self.state.spawn_pawn(template, position)?;
        tracing::debug!(%id, %position, glyph = %template.glyph, "spawned pawn");
        Ok(id)
    }

    /// Stamps `amount` units of the named definition into a pawn's
    /// inventory. The add outcome's `leftover` reports what found no room.
    pub fn grant_item(
        &mut self,
        pawn: EntityId,
        name: &str,
        amount: u32,
        auto_equip: bool,
    ) -> Result<AddOutcome, SessionError> {
        let items = Env::with_items(&self.items).items()?;
        let definition = items
            .definition(name)
            .ok_or_else(|| SessionError::UnknownItem(name.to_string()))?;
        let item = definition.instantiate(amount);
        self.state
            .give_item(pawn, item, auto_equip)
            .ok_or(SessionError::PawnNotFound(pawn))
    }

    /// Removes up to `amount` units of the named item from a pawn.
    pub fn strip_item(
        &mut self,
        pawn: EntityId,
        name: &str,
        amount: u32,
    ) -> Result<RemoveOutcome, SessionError> {
        self.state
            .take_item(pawn, name, amount)
            .ok_or(SessionError::PawnNotFound(pawn))
    }

    /// Queues a command for the next turn.
    pub fn push_command(&mut self, action: impl Into<Action>) {
        self.pending.push(action.into());
    }

    /// Runs one turn: flushes queued commands through the engine, logs the
    /// drained events and debug messages, and returns the report.
    pub fn step(&mut self) -> TurnReport {
        let commands = std::mem::take(&mut self.pending);
        let env = Env::with_items(&self.items).as_game_env();
        let report = GameEngine::new(&mut self.state).run_turn(&env, &commands);

        for event in &report.events {
            match event {
                GameEvent::Died { victim, source } => {
                    tracing::info!(%victim, %source, "pawn died");
                }
                other => tracing::debug!(event = ?other, "game event"),
            }
        }
        for message in &report.debug_messages {
            tracing::debug!(target: "warren::debug_sink", "{message}");
        }
        for error in &report.errors {
            tracing::debug!(%error, "command failed");
        }
        tracing::debug!(
            turn = report.turn,
            gameplay_update = report.gameplay_update,
            swept = report.swept,
            "turn complete"
        );

        report
    }
}
