//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::ActionResult;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - check preconditions before mutation
/// 2. `apply` - mutate the game state and return the outcome
/// 3. `post_validate` - verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Outcome, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

/// Routes an action to its transition and wraps the result.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Move(transition) => {
            let outcome = drive_transition(transition, state, env).map_err(ExecuteError::Move)?;
            Ok(ActionResult::Move(outcome))
        }
        Action::UseItem(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::UseItem)?;
            Ok(ActionResult::UseItem)
        }
        Action::Equip(transition) => {
            let equipped =
                drive_transition(transition, state, env).map_err(ExecuteError::Equip)?;
            Ok(ActionResult::Equip { equipped })
        }
        Action::Wait(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Wait)?;
            Ok(ActionResult::Wait)
        }
    }
}
