//! Marker trait for screen state.

/// Marker trait for UI state objects.
///
/// A state is replaced, never patched in place from the outside: reducers
/// take it by value and hand back the successor. `Default` is what
/// `std::mem::take` leaves behind during a dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
