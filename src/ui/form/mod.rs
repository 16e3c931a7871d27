//! Modal create/edit dialog (MVI pattern).

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_form_dialog;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormState};
