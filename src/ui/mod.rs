//! Terminal UI: one tabbed list view per entity, driven by a single event
//! loop over terminal input, ticks, and settled request outcomes.

pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notify;
pub mod pane;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;
