use crate::api::ApiError;
use crate::model::{Record, RecordId};
use crate::store::view::{derive_view, SortCriteria, SortDirection};

/// Outcome of the most recent request against this collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// State for one remote collection: the fetched records, the local query
/// and sort settings, and the view derived from them.
///
/// The store is purely reactive. Callers mark a request as started with
/// [`begin_fetch`](Self::begin_fetch) and feed results back through the
/// `finish_*` methods once the network run completes; nothing here blocks.
#[derive(Debug)]
pub struct CollectionStore<R: Record> {
    records: Vec<R>,
    view: Vec<R>,
    query: String,
    sort: Option<SortCriteria>,
    status: RequestStatus,
}

impl<R: Record> Default for CollectionStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> CollectionStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            view: Vec::new(),
            query: String::new(),
            sort: None,
            status: RequestStatus::default(),
        }
    }

    /// Mark a list request as in flight. Existing records stay visible
    /// until the response lands.
    pub fn begin_fetch(&mut self) {
        self.status.loading = true;
    }

    /// Reconcile a completed list request. Success replaces the whole
    /// collection and clears any prior error; failure empties it and
    /// records the error text.
    pub fn finish_fetch(&mut self, result: Result<Vec<R>, ApiError>) {
        self.status.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.status.error = None;
            }
            Err(err) => {
                self.records.clear();
                self.status.error = Some(err.user_message());
            }
        }
        self.recompute();
    }

    /// Reconcile a create request. The backend's response record (with its
    /// assigned id) is appended locally. Returns whether the call succeeded.
    pub fn finish_create(&mut self, result: Result<R, ApiError>) -> bool {
        match result {
            Ok(record) => {
                self.records.push(record);
                self.recompute();
                true
            }
            Err(err) => {
                tracing::warn!(resource = R::RESOURCE, error = %err, "create failed");
                false
            }
        }
    }

    /// Reconcile an update request. On success the draft is merged into the
    /// matching record; a record deleted in the meantime is a quiet no-op.
    pub fn finish_update(
        &mut self,
        id: &RecordId,
        draft: &R::Draft,
        result: Result<(), ApiError>,
    ) -> bool {
        match result {
            Ok(()) => {
                if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
                    record.apply_draft(draft);
                }
                self.recompute();
                true
            }
            Err(err) => {
                tracing::warn!(resource = R::RESOURCE, error = %err, "update failed");
                false
            }
        }
    }

    /// Reconcile a delete request. Local removal happens only after the
    /// backend confirms.
    pub fn finish_delete(&mut self, id: &RecordId, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.records.retain(|r| r.id() != id);
                self.recompute();
                true
            }
            Err(err) => {
                tracing::warn!(resource = R::RESOURCE, error = %err, "delete failed");
                false
            }
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// Select `field` as the sort key. Selecting the active field again
    /// flips the direction; a new field starts ascending.
    pub fn set_sort(&mut self, field: &'static str) {
        self.sort = Some(match self.sort {
            Some(current) if current.field == field => SortCriteria {
                field,
                direction: current.direction.toggled(),
            },
            _ => SortCriteria {
                field,
                direction: SortDirection::Ascending,
            },
        });
        self.recompute();
    }

    pub fn view(&self) -> &[R] {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<&SortCriteria> {
        self.sort.as_ref()
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn recompute(&mut self) {
        self.view = derive_view(&self.records, &self.query, self.sort.as_ref());
    }
}
