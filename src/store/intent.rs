//! Base trait for intents (operation lifecycle events).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Operations entering flight (pending)
/// - Async outcomes (responses, failures)
/// - Caller actions (reset)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
