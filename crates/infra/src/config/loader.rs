//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `RECICLO_DB_PATH` is not set, falls back to loading from file
//! 3. Probes the working directory and the executable directory
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `RECICLO_DB_PATH`: Database file path (required for env loading)
//! - `RECICLO_DB_POOL_SIZE`: Connection pool size
//! - `RECICLO_LEVEL_SIZE`: Points per level
//! - `RECICLO_CELEBRATION_THRESHOLD`: Points above which a reward is
//!   celebrated with a toast
//! - `RECICLO_SIMULATED_LATENCY_MS`: Artificial auth delay

use std::path::{Path, PathBuf};
use std::str::FromStr;

use reciclo_domain::{Config, RecicloError, Result, StorageConfig};

const CONFIG_FILE_NAMES: [&str; 4] = ["reciclo.toml", "reciclo.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `RecicloError::Config` if neither the environment nor a config
/// file yields a valid configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Like [`load`], but falls back to `Config::default()` when nothing is
/// found.
pub fn load_or_default() -> Config {
    load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "No usable configuration found, using defaults");
        Config::default()
    })
}

/// Load configuration from environment variables
///
/// Only `RECICLO_DB_PATH` is required; every other variable falls back to
/// its default when unset.
///
/// # Errors
/// Returns `RecicloError::Config` if `RECICLO_DB_PATH` is missing or a
/// numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.storage = StorageConfig {
        path: env_var("RECICLO_DB_PATH")?,
        pool_size: env_parse("RECICLO_DB_POOL_SIZE")?.unwrap_or(config.storage.pool_size),
    };

    if let Some(level_size) = env_parse("RECICLO_LEVEL_SIZE")? {
        config.gamification.level_size = level_size;
    }
    if let Some(threshold) = env_parse("RECICLO_CELEBRATION_THRESHOLD")? {
        config.gamification.celebration_threshold = Some(threshold);
    }
    if let Some(latency) = env_parse("RECICLO_SIMULATED_LATENCY_MS")? {
        config.session.simulated_latency_ms = latency;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations via
/// [`probe_config_paths`]. Format is detected by extension.
///
/// # Errors
/// Returns `RecicloError::Config` if the file is missing, unreadable or
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RecicloError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RecicloError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RecicloError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, detecting the format from the
/// extension of `path`.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RecicloError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RecicloError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RecicloError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the working directory, then the executable's directory, for the
/// first existing config file.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    probe_dirs(&dirs)
}

fn probe_dirs(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        RecicloError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// `Ok(None)` when `key` is unset
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| RecicloError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}
