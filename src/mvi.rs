//! Model-View-Intent (MVI) primitives.
//!
//! All state transitions in the application flow through reducers:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: self-contained snapshot of a feature's state
//! - **Intent**: a user action or system event
//! - **Reducer**: pure function that transforms state based on intents

/// Marker trait for state objects.
///
/// States are cloned to create new versions, compared to detect changes,
/// and default-constructed at startup.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents (user or system actions).
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
