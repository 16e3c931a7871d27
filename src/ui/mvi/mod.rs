//! Unidirectional state traits for the dialog layer.
//!
//! Interactive widgets keep their state behind a reducer: input handling
//! emits an intent, the reducer folds it into a fresh state, and rendering
//! only ever reads state. The form dialog is the current user of these
//! traits; anything modal added later should follow the same shape.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
