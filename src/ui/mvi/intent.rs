//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents describe something the user asked for (remove a card, type into
/// the search box, bump the counter). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
