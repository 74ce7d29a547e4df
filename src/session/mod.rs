//! Session state store.
//!
//! One [`SessionState`] value holds everything the kiosk knows about the
//! current visitor: identity, quiz progress, and the per-demo interaction
//! histories. It changes only through [`SessionIntent`] transitions applied
//! by the pure [`SessionReducer`], and the [`SessionStore`] serializes those
//! writes on the UI thread.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{
    AudioClip, ChatDemoState, ChatMessage, ChatRole, DemoStates, QuizState, SessionState,
    SynthesisDemoState, TranscriptionDemoState, TranscriptionRecord, UserProfile,
    VisionDemoState, VisionMessage,
};
pub use store::{AppState, Intent, Reducer, Store};

/// The one store this application runs on.
pub type SessionStore = Store<SessionReducer>;
