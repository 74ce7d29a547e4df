//! Application configuration.
//!
//! TOML file under the platform config directory, every field optional with
//! sensible defaults, validated after parse. CLI flags override individual
//! fields after loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AudioConfig, BackendConfig, Config, QuizConfig};
