//! Model-View-Intent (MVI) primitives for the UI layer.
//!
//! Unidirectional data flow: an [`Intent`] (user action or system event)
//! goes through a [`Reducer`], which produces the next [`UiState`] that
//! the view renders. Side effects (backend calls) live outside the
//! reducer, in the app.

/// Marker trait for UI state objects.
///
/// A state is a self-contained snapshot of everything the view needs,
/// cloned to produce the next state and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions, timer ticks, and results
/// arriving from the backend.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`, no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
