//! Base trait for intents (confirmed events) in the view layer.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Confirmed server results (a fetched list, a fetched book)
/// - Push events from the stats feed
/// - Local edits to input buffers
///
/// Failures are not intents. A failed call surfaces as an error to its
/// caller and produces no transition, which is what keeps the last good
/// state on screen.
pub trait Intent: Send + 'static {}
