use crate::model::{Record, RecordId};
use crate::store::CollectionStore;
use crate::ui::events::{CollectionCommand, CollectionOutcome};
use crate::ui::form::{FormField, FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::notify::Notifications;
use tokio::sync::mpsc;

/// One entity tab: its collection store, row selection, and form dialog.
///
/// The pane owns no network state. It sends [`CollectionCommand`]s to the
/// entity's worker and reconciles the [`CollectionOutcome`]s the runtime
/// feeds back, emitting toasts only once an outcome is confirmed.
pub struct Pane<R: Record> {
    store: CollectionStore<R>,
    commands: mpsc::Sender<CollectionCommand<R>>,
    selected: usize,
    form: FormState,
}

impl<R: Record> Pane<R> {
    pub fn new(commands: mpsc::Sender<CollectionCommand<R>>) -> Self {
        Self {
            store: CollectionStore::new(),
            commands,
            selected: 0,
            form: FormState::default(),
        }
    }

    pub fn store(&self) -> &CollectionStore<R> {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&R> {
        self.store.view().get(self.selected)
    }

    /// Request a full reload. The current view stays visible until the
    /// response arrives.
    pub fn fetch(&mut self) {
        self.store.begin_fetch();
        self.send(CollectionCommand::Fetch);
    }

    /// Apply a settled request and emit the matching toast.
    pub fn on_outcome(&mut self, outcome: CollectionOutcome<R>, notifications: &mut Notifications) {
        let noun = R::DISPLAY_NAME.to_lowercase();
        match outcome {
            CollectionOutcome::Fetched(result) => {
                // Fetch failures surface inline in the body, not as a toast.
                self.store.finish_fetch(result);
            }
            CollectionOutcome::Created(result) => {
                if self.store.finish_create(result) {
                    notifications.success(format!("{} added successfully", R::DISPLAY_NAME));
                } else {
                    notifications.error(format!("Failed to add {}", noun));
                }
            }
            CollectionOutcome::Updated { id, draft, result } => {
                if self.store.finish_update(&id, &draft, result) {
                    notifications.success(format!("{} updated successfully", R::DISPLAY_NAME));
                } else {
                    notifications.error(format!("Failed to update {}", noun));
                }
            }
            CollectionOutcome::Deleted { id, result } => {
                if self.store.finish_delete(&id, result) {
                    notifications.success(format!("{} deleted successfully", R::DISPLAY_NAME));
                } else {
                    notifications.error(format!("Failed to delete {}", noun));
                }
            }
        }
        self.clamp_selection();
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.store.view().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1) as i32;
        self.selected = current.saturating_add(delta).clamp(0, len as i32 - 1) as usize;
    }

    /// Sort by the `slot`-th sortable column (zero-based), as displayed.
    pub fn sort_by_slot(&mut self, slot: usize) {
        let Some(spec) = R::FIELDS.iter().filter(|spec| spec.sortable).nth(slot) else {
            return;
        };
        self.store.set_sort(spec.name);
        self.clamp_selection();
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut query = self.store.query().to_string();
        query.push(ch);
        self.store.set_search_query(query);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        let mut query = self.store.query().to_string();
        query.pop();
        self.store.set_search_query(query);
        self.clamp_selection();
    }

    pub fn open_create_form(&mut self) {
        self.dispatch_form(FormIntent::Open {
            title: format!("Add {}", R::DISPLAY_NAME),
            fields: blank_fields::<R>(),
            editing: None,
        });
    }

    /// Open the dialog pre-populated with the selected record. Does nothing
    /// when the view is empty.
    pub fn open_edit_form(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        let values = record.form_values();
        let fields = R::FIELDS
            .iter()
            .zip(values)
            .map(|(spec, value)| FormField {
                label: spec.label,
                required: spec.required,
                value,
            })
            .collect();
        let id = record.id().clone();
        self.dispatch_form(FormIntent::Open {
            title: format!("Edit {}", R::DISPLAY_NAME),
            fields,
            editing: Some(id),
        });
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        self.form = FormReducer::reduce(std::mem::take(&mut self.form), intent);
    }

    /// Validate the dialog and send the create or update command. Invalid
    /// input keeps the dialog open with the field error shown inline.
    pub fn submit_form(&mut self) {
        if !self.form.is_visible() {
            return;
        }
        let values = self.form.values();
        let draft = match R::draft_from_form(&values) {
            Ok(draft) => draft,
            Err(err) => {
                self.dispatch_form(FormIntent::Invalid {
                    message: err.to_string(),
                });
                return;
            }
        };
        match self.form.editing().cloned() {
            Some(id) => self.send(CollectionCommand::Update { id, draft }),
            None => self.send(CollectionCommand::Create { draft }),
        }
        self.dispatch_form(FormIntent::Close);
    }

    /// Delete the selected record. No confirmation step; the row disappears
    /// once the backend acknowledges.
    pub fn delete_selected(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        let id: RecordId = record.id().clone();
        self.send(CollectionCommand::Delete { id });
    }

    fn send(&mut self, command: CollectionCommand<R>) {
        if let Err(err) = self.commands.try_send(command) {
            tracing::warn!(resource = R::RESOURCE, error = %err, "dropping command");
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.view().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

fn blank_fields<R: Record>() -> Vec<FormField> {
    R::FIELDS
        .iter()
        .map(|spec| FormField {
            label: spec.label,
            required: spec.required,
            value: String::new(),
        })
        .collect()
}
