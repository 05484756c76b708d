//! Reducer trait for the view layer.

use super::intent::Intent;
use super::state::ViewState;

/// Folds intents into successive states.
///
/// The reducer is the only place where state transitions happen, and it
/// must be a pure function: (State, Intent) -> State. Anything that can
/// fail runs before the intent is constructed, so by the time `reduce`
/// sees an intent the transition is unconditional.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ViewState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Produce the state that follows `state` under `intent`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
