//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States should be:
/// - Replaced, not mutated in place (Clone produces the next snapshot)
/// - Self-contained (everything a view needs to render)
/// - Comparable (PartialEq so unchanged state skips re-rendering)
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
