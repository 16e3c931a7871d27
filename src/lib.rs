//! backdesk: a terminal back-office client for REST collection APIs.
//!
//! Two record types (products and users) are managed against a backend
//! exposing the standard collection verbs. The full set is fetched once
//! per tab visit; search and sort are purely client-side projections over
//! it. See [`store::CollectionStore`] for the state machine and
//! [`ui::runtime::run`] for the event loop.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;
