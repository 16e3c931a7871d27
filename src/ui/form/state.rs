use crate::model::RecordId;
use crate::ui::mvi::UiState;

/// One editable line of the dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub required: bool,
    pub value: String,
}

/// State of the create/edit dialog.
///
/// The same dialog serves both flows: `editing` carries the identifier of
/// the record being changed, or `None` when submitting creates a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Visible {
        title: String,
        fields: Vec<FormField>,
        focused: usize,
        editing: Option<RecordId>,
        /// Validation message from the last rejected submit.
        error: Option<String>,
    },
}

impl UiState for FormState {}

impl FormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Raw field values in declaration order, for validation on submit.
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::Hidden => Vec::new(),
            Self::Visible { fields, .. } => {
                fields.iter().map(|field| field.value.clone()).collect()
            }
        }
    }

    pub fn editing(&self) -> Option<&RecordId> {
        match self {
            Self::Hidden => None,
            Self::Visible { editing, .. } => editing.as_ref(),
        }
    }
}
