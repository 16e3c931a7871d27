use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open {
                title,
                fields,
                editing,
            } => FormState::Visible {
                title,
                fields,
                focused: 0,
                editing,
                error: None,
            },
            FormIntent::Close => FormState::Hidden,
            FormIntent::FocusNext => match state {
                FormState::Visible {
                    title,
                    fields,
                    focused,
                    editing,
                    error,
                } => {
                    let next = if focused + 1 >= fields.len() { 0 } else { focused + 1 };
                    FormState::Visible {
                        title,
                        fields,
                        focused: next,
                        editing,
                        error,
                    }
                }
                other => other,
            },
            FormIntent::FocusPrev => match state {
                FormState::Visible {
                    title,
                    fields,
                    focused,
                    editing,
                    error,
                } => {
                    let prev = if focused == 0 {
                        fields.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    FormState::Visible {
                        title,
                        fields,
                        focused: prev,
                        editing,
                        error,
                    }
                }
                other => other,
            },
            FormIntent::Input(ch) => match state {
                FormState::Visible {
                    title,
                    mut fields,
                    focused,
                    editing,
                    ..
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        field.value.push(ch);
                    }
                    FormState::Visible {
                        title,
                        fields,
                        focused,
                        editing,
                        error: None,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                FormState::Visible {
                    title,
                    mut fields,
                    focused,
                    editing,
                    ..
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        field.value.pop();
                    }
                    FormState::Visible {
                        title,
                        fields,
                        focused,
                        editing,
                        error: None,
                    }
                }
                other => other,
            },
            FormIntent::Invalid { message } => match state {
                FormState::Visible {
                    title,
                    fields,
                    focused,
                    editing,
                    ..
                } => FormState::Visible {
                    title,
                    fields,
                    focused,
                    editing,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}
