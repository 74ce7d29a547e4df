use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

/// Where the AI backend lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the capability backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 60; synthesis and
    /// transcription can be slow on first use).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds as u64)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds as u64)
    }
}

/// Quiz attempt settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Countdown before the attempt auto-submits, in seconds (default: 600).
    #[serde(default = "default_time_limit")]
    pub time_limit_seconds: u64,
    /// Score percentage counted as a pass (default: 70).
    #[serde(default = "default_pass_percent")]
    pub pass_percent: u8,
}

impl QuizConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_seconds)
    }
}

/// Speech demo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Where synthesized clips and captured recordings are written.
    /// Defaults to the user cache directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Voice selector passed to the synthesis endpoint.
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Playback speed factor passed to the synthesis endpoint.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Optional external recorder command for the speech-to-text demo. The
    /// destination file path is appended as the final argument. When unset,
    /// the demo works from audio files picked by path.
    #[serde(default)]
    pub capture_command: Option<String>,
}

impl AudioConfig {
    /// Resolved output directory for audio artifacts.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("aikiosk")
                .join("audio")
        })
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u32 {
    60
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_time_limit() -> u64 {
    600
}

fn default_pass_percent() -> u8 {
    70
}

fn default_voice() -> String {
    "tts_models/multilingual/multi-dataset/xtts_v2".to_string()
}

fn default_speed() -> f32 {
    1.0
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit_seconds: default_time_limit(),
            pass_percent: default_pass_percent(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            voice: default_voice(),
            speed: default_speed(),
            capture_command: None,
        }
    }
}
