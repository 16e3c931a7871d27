//! Record types managed by the collection stores.
//!
//! The backend owns the data model; this module mirrors its wire shapes
//! and adds the field metadata the generic store and view layers run on.

mod field;
mod id;
mod product;
mod record;
mod user;

pub use field::{FieldError, FieldKind, FieldSpec, FieldValue};
pub use id::RecordId;
pub use product::{Product, ProductDraft};
pub use record::Record;
pub use user::{User, UserDraft};
