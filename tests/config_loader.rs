use std::io::Write;

use aikiosk::config::{Config, ConfigError};
use tempfile::NamedTempFile;

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.backend.timeout_seconds, 60);
    assert_eq!(config.backend.connect_timeout_seconds, 5);
    assert_eq!(config.quiz.time_limit_seconds, 600);
    assert_eq!(config.quiz.pass_percent, 70);
    assert_eq!(config.audio.speed, 1.0);
    assert!(config.audio.capture_command.is_none());
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("aikiosk/config.toml"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = Config::load_from(std::path::Path::new("/nonexistent/aikiosk.toml"))
        .expect("missing file should not be an error");
    assert_eq!(config.backend.base_url, Config::default().backend.base_url);
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[backend]\nbase_url = \"http://10.0.0.5:9000\"\n\n[quiz]\ntime_limit_seconds = 120"
    )
    .expect("write config");

    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(config.backend.base_url, "http://10.0.0.5:9000");
    assert_eq!(config.backend.timeout_seconds, 60);
    assert_eq!(config.quiz.time_limit_seconds, 120);
    assert_eq!(config.quiz.pass_percent, 70);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "[backend\nbase_url = ").expect("write config");

    match Config::load_from(file.path()) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn empty_base_url_fails_validation() {
    let mut config = Config::default();
    config.backend.base_url = "  ".to_string();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("base_url"));
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn zero_time_limit_fails_validation() {
    let mut config = Config::default();
    config.quiz.time_limit_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn negative_speed_fails_validation() {
    let mut config = Config::default();
    config.audio.speed = -0.5;
    assert!(config.validate().is_err());
}

#[test]
fn capture_command_round_trips() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[audio]\ncapture_command = \"arecord -f S16_LE -r 16000\""
    )
    .expect("write config");

    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(
        config.audio.capture_command.as_deref(),
        Some("arecord -f S16_LE -r 16000")
    );
}
