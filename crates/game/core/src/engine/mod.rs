//! Turn scheduling and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for
//! [`GameState`](crate::state::GameState). Single actions flow through
//! `execute()`; a whole turn flows through `run_turn()`, which walks the
//! explicit phase sequence Input → Action → EffectsTick and then sweeps the
//! dead.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, MoveOutcome};
use crate::env::GameEnv;
use crate::events::GameEvent;
use crate::state::{EquipKind, GameState, TurnPhase};

/// Action-specific execution result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionResult {
    Move(MoveOutcome),
    UseItem,
    Equip { equipped: bool },
    Wait,
}

/// Everything one turn produced, handed to the driving collaborator.
#[derive(Clone, Debug, Default)]
pub struct TurnReport {
    /// The turn that just completed.
    pub turn: u64,
    /// True iff at least one staged command executed successfully.
    pub gameplay_update: bool,
    /// Notifications drained from the state buffer.
    pub events: Vec<GameEvent>,
    /// Debug-sink messages drained from the state buffer.
    pub debug_messages: Vec<String>,
    /// Benign per-command failures (blocked rules, bad slots).
    pub errors: Vec<ExecuteError>,
    /// How many dead pawns the sweep removed.
    pub swept: usize,
}

/// Game engine that manages action execution and the turn pipeline.
///
/// All state mutation flows through the three-phase action pipeline:
/// pre_validate → apply → post_validate.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes a single action through the transition pipeline.
    pub fn execute(
        &mut self,
        env: &GameEnv<'_>,
        action: &Action,
    ) -> Result<ActionResult, ExecuteError> {
        transition::execute_transition(action, self.state, env)
    }

    /// Runs one full simulation turn.
    ///
    /// 1. **Input**: stage at most one command per live pawn; commands for
    ///    missing or dead pawns are dropped with a debug message.
    /// 2. **Action**: execute staged commands in registry (insertion)
    ///    order. Failures are recorded in the report, not escalated.
    /// 3. **EffectsTick**: apply the lasting-effect tick to every live pawn
    ///    in registry order.
    ///
    /// Afterwards the dead are swept, the turn counter advances, and the
    /// buffered events and debug messages are drained into the report.
    pub fn run_turn(&mut self, env: &GameEnv<'_>, commands: &[Action]) -> TurnReport {
        let mut report = TurnReport::default();

        self.state.turn.phase = TurnPhase::Input;
        let mut staged: Vec<Action> = Vec::with_capacity(commands.len());
        for command in commands {
            let actor = command.actor();
            let known = self
                .state
                .entities
                .pawn(actor)
                .is_some_and(|pawn| pawn.is_alive());
            if !known {
                self.state
                    .add_debug_message(format!("dropping {} for pawn {actor}", command.as_snake_case()));
                continue;
            }
            if staged.iter().any(|other| other.actor() == actor) {
                self.state
                    .add_debug_message(format!("pawn {actor} already acted this turn"));
                continue;
            }
            staged.push(command.clone());
        }

        self.state.turn.phase = TurnPhase::Action;
        for id in self.state.entities.ids() {
            let Some(action) = staged.iter().find(|action| action.actor() == id) else {
                continue;
            };
            match self.execute(env, action) {
                Ok(_) => report.gameplay_update = true,
                Err(error) => report.errors.push(error),
            }
        }

        self.state.turn.phase = TurnPhase::EffectsTick;
        for pawn in self.state.entities.iter_mut() {
            if pawn.is_alive() {
                pawn.tick_effects();
            }
        }

        report.swept = self.state.sweep_removed();
        report.turn = self.state.turn.turn;
        self.state.turn.turn += 1;
        self.state.turn.phase = TurnPhase::Input;

        // Equip notifications double as debug-sink messages, the way the
        // world used to announce slot changes.
        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::Equipped { kind, .. } = event {
                let slot = match kind {
                    EquipKind::Armor => "armor",
                    EquipKind::Weapon => "weapon",
                    EquipKind::None => continue,
                };
                self.state
                    .add_debug_message(format!("equipped item in {slot} slot"));
            }
        }
        report.events = events;
        report.debug_messages = self.state.drain_debug_messages();

        report
    }
}
