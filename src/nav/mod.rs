//! Navigation sequencing.
//!
//! Pure and stateless: everything (position, progress percentage, gating of
//! the previous/next controls) is re-derived from the current [`Step`] on
//! every query. Actually changing the rendered step is the UI shell's job.

mod step;

pub use step::Step;
