//! Base trait for screen intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (typing, focus moves, submit) or
/// results of requests issued on behalf of a screen. Result intents cross
/// from the runtime back to the UI thread, hence `Send`.
pub trait Intent: Send + 'static {}
