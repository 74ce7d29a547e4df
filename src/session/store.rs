//! Store primitives: the state/intent/reducer contracts and the dispatch
//! container that owns the current snapshot.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure: `(State, Intent) -> State`, no side effects. All I/O
//! (backend calls, file access, timers) happens around the dispatch call and
//! re-enters the store as ordinary intents.

/// Marker trait for state aggregates.
///
/// States are immutable snapshots: cheap to clone, comparable for change
/// detection, and constructible as an all-defaults session.
pub trait AppState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents (named transitions).
pub trait Intent: Send + 'static {}

/// Transforms state in response to intents.
///
/// The reducer is the only place where state transitions happen, and it must
/// be a total function over its intent set: every intent produces a state,
/// never an error.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: AppState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Owns the current state snapshot and serializes writes.
///
/// Dispatch runs synchronously to completion on the calling thread, so no
/// intent ever observes a partially-applied predecessor. Concurrent work
/// must send its results back to the owning thread and dispatch from there.
pub struct Store<R: Reducer> {
    state: R::State,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self {
            state: R::State::default(),
        }
    }

    /// Read access to the current snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply one intent through the reducer.
    pub fn dispatch(&mut self, intent: R::Intent) {
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
