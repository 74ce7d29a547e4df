//! Backend capability client.
//!
//! Four logical endpoints (chat completion, image analysis, speech
//! transcription, speech synthesis) plus a health probe, all against a
//! single configurable base URL. Failures surface as [`ApiError`] and are
//! converted into displayable history entries by the screens; nothing here
//! retries.

mod client;
mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
