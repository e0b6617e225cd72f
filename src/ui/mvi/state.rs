//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are replaced wholesale, never mutated in place, and carry
/// everything the view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
