//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Turns a state and an intent into the next state.
///
/// Reducers never read the clock, the RNG or the terminal. A random counter
/// step or a generated user id is resolved by the engine and arrives inside
/// the intent, so the same (State, Intent) pair always reduces to the same
/// state.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Consumes `state` and returns its successor.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
