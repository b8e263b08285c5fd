//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use reciclo_infra::config;
use tempfile::TempDir;

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("reciclo.toml");
    std::fs::write(
        &path,
        r#"
[storage]
path = "/tmp/reciclo-integration.db"
pool_size = 8

[gamification]
level_size = 400
celebration_threshold = 100

[gamification.rates]
pet = 12

[session]
simulated_latency_ms = 1500
"#,
    )
    .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("Failed to load config from TOML file");

    assert_eq!(config.storage.path, "/tmp/reciclo-integration.db");
    assert_eq!(config.storage.pool_size, 8);
    assert_eq!(config.gamification.level_size, 400);
    assert_eq!(config.gamification.celebration_threshold, Some(100));
    assert_eq!(config.gamification.rates.pet, 12);
    assert_eq!(config.gamification.rates.glass, 15);
    assert_eq!(config.session.simulated_latency_ms, 1500);
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("reciclo.json");
    std::fs::write(&path, r#"{ "gamification": { "rates": { "paper": 7 } } }"#)
        .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("Failed to load config from JSON file");

    assert_eq!(config.gamification.rates.paper, 7);
    assert_eq!(config.gamification.level_size, 300);
    assert_eq!(config.storage.path, "reciclo.db");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("reciclo.toml");
    std::fs::write(&path, "[storage\npath = ").expect("Failed to write config");

    let result = config::load_from_file(Some(path));
    assert!(matches!(result, Err(reciclo_domain::RecicloError::Config(_))));
}
