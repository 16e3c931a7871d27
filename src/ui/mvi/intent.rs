//! Intent side of the reducer contract.

/// Marker trait for the inputs a reducer folds over.
///
/// An intent is a fact that something happened, such as a keystroke routed
/// to the dialog or a validation failure. It never prescribes how state
/// should change; that mapping belongs to the reducer.
pub trait Intent: Send + 'static {}
