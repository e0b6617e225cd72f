//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (a retry key press) and system events
/// (a fetch finishing). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
