//! HTTP client for the collection REST backend.
//!
//! Every record type maps to one resource path under the configured base
//! url, with the standard verb layout: `GET /<resource>` lists,
//! `POST /<resource>` creates, `PUT /<resource>/<id>` updates, and
//! `DELETE /<resource>/<id>` removes.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
