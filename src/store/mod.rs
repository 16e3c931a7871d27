//! Client-side state for remote collections.
//!
//! [`CollectionStore`] holds the last fetched records plus the local query
//! and sort settings, and recomputes the visible view whenever either side
//! changes. Network results are reconciled through the `finish_*` methods;
//! the store itself never talks to the network.

mod collection;
mod view;

pub use collection::{CollectionStore, RequestStatus};
pub use view::{derive_view, SortCriteria, SortDirection};
