use crate::model::field::{FieldError, FieldSpec, FieldValue};
use crate::model::id::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A backend collection entry the application can list and edit.
///
/// Implementations describe their fields statically through [`FieldSpec`]
/// so the store, table, and form dialog stay generic. The associated
/// `Draft` is the partial write shape: it is serialized as the body of
/// both create and update requests, with unset fields omitted entirely.
pub trait Record: Clone + Debug + PartialEq + Send + DeserializeOwned + 'static {
    // Sync because the worker's request futures borrow the draft across
    // an await and must stay Send.
    type Draft: Clone + Debug + PartialEq + Default + Serialize + Send + Sync + 'static;

    /// Path segment under the API base url, e.g. `products`.
    const RESOURCE: &'static str;
    /// Singular human name used in dialog titles and notifications.
    const DISPLAY_NAME: &'static str;
    /// Field metadata in display order.
    const FIELDS: &'static [FieldSpec];

    fn id(&self) -> &RecordId;

    /// Look up a field by its spec name. Returns `None` for unknown names.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Merge a draft into this record, overwriting only the fields the
    /// draft carries. Mirrors how the backend applies partial updates.
    fn apply_draft(&mut self, draft: &Self::Draft);

    /// Validate raw form input (one string per entry in [`Self::FIELDS`])
    /// into a draft, failing on the first invalid field.
    fn draft_from_form(values: &[String]) -> Result<Self::Draft, FieldError>;

    /// Current field values as editable form text, in [`Self::FIELDS`] order.
    fn form_values(&self) -> Vec<String>;
}
