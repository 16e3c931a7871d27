//! The transition function tying states to intents.

use super::intent::Intent;
use super::state::UiState;

/// A pure state transition: every change to a [`UiState`] goes through
/// `reduce`, which keeps the transitions testable without a terminal.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Fold one intent into the state. Must not perform I/O; side effects
    /// happen where the resulting state is observed.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
