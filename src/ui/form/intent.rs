use crate::model::RecordId;
use crate::ui::form::state::FormField;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Open the dialog, blank for create or pre-populated for edit.
    Open {
        title: String,
        fields: Vec<FormField>,
        editing: Option<RecordId>,
    },
    Close,
    FocusNext,
    FocusPrev,
    /// Append a character to the focused field. Clears any validation error.
    Input(char),
    /// Remove the last character of the focused field.
    Backspace,
    /// Submit was rejected by validation; keep the dialog open and show why.
    Invalid { message: String },
}

impl Intent for FormIntent {}
