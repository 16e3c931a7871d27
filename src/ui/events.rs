//! Messages crossing the UI/network boundary.
//!
//! The UI is single-threaded; network calls happen on worker tasks. A
//! [`CollectionCommand`] travels from the UI to a worker, the matching
//! [`CollectionOutcome`] comes back through the shared event channel once
//! the request settles. Commands are independent: nothing deduplicates or
//! cancels them, and outcomes apply in arrival order.

use crate::api::ApiError;
use crate::model::{Product, Record, RecordId, User};

/// A remote operation requested by the UI.
#[derive(Debug)]
pub enum CollectionCommand<R: Record> {
    Fetch,
    Create { draft: R::Draft },
    Update { id: RecordId, draft: R::Draft },
    Delete { id: RecordId },
}

/// The settled result of one command.
///
/// Update and delete echo the identifier (and draft) back so the store can
/// reconcile without tracking in-flight requests itself.
#[derive(Debug)]
pub enum CollectionOutcome<R: Record> {
    Fetched(Result<Vec<R>, ApiError>),
    Created(Result<R, ApiError>),
    Updated {
        id: RecordId,
        draft: R::Draft,
        result: Result<(), ApiError>,
    },
    Deleted {
        id: RecordId,
        result: Result<(), ApiError>,
    },
}

/// Outcome tagged with the entity it belongs to, as carried on the single
/// UI event channel.
#[derive(Debug)]
pub enum ApiOutcome {
    Products(CollectionOutcome<Product>),
    Users(CollectionOutcome<User>),
}
