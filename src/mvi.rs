//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State transitions of the composer are expressed as a pure reducer so
//! that every transition can be tested without a gateway or a terminal.

/// Marker trait for state snapshots.
///
/// States are cloned out to the view, so they must be cheap enough to
/// clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and request completions.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// This is the only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
