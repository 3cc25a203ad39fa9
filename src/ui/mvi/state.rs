//! Base trait for screen state in MVI architecture.

/// Marker trait for screen state snapshots.
///
/// States are cloned rather than mutated in place, compared to detect
/// changes, and `Default` so a reducer can take ownership with
/// `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
