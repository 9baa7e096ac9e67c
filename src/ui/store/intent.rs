//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (field edits, button clicks)
/// - System events (command completion, failures)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
