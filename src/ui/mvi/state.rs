//! State side of the reducer contract.

/// Marker trait for reducer-owned state.
///
/// A state value is a complete snapshot: the renderer draws from it alone,
/// transitions clone-and-replace rather than mutate in place, and
/// `PartialEq` lets callers skip work when a transition was a no-op.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
