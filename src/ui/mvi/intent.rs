//! Marker trait for intents.

/// A user action the screen reacts to.
///
/// Intents carry only what the reducer needs (typed characters, target
/// ids); key decoding happens before an intent is built.
pub trait Intent: Send + 'static {}
