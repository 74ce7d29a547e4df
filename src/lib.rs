//! Guided AI experience kiosk.
//!
//! A linear ten-step terminal journey: welcome, background info, name
//! entry, four AI capability demos (chat, vision, speech-to-text,
//! text-to-speech), a timed quiz, results, and a completion certificate,
//! all backed by an HTTP capability backend.
//!
//! The heart of the crate is [`session`]: a single state aggregate mutated
//! only through named transitions applied by a pure reducer. [`nav`] derives
//! progress and navigation gating from the fixed step order, [`quiz`] owns
//! scoring and the attempt countdown, and [`ui`] wires it all to a terminal.

pub mod api;
pub mod cert;
pub mod config;
pub mod nav;
pub mod quiz;
pub mod session;
pub mod ui;
