//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `LODGELY_DB_PATH`: Database file path (required)
//! - `LODGELY_DB_POOL_SIZE`: Connection pool size (required)
//! - `LODGELY_SITE_LOCALES`: Comma-separated site locales, e.g. `en,fr`
//! - `LODGELY_DEFAULT_LOCALE`: Fallback locale
//! - `LODGELY_COMPLETION_MIN_IMAGES`: Pictures a complete profile shows
//! - `LODGELY_COMPLETION_STRICT`: Strict completion policy (true/false)
//! - `LODGELY_LOG_LEVEL`: `EnvFilter` directive
//! - `LODGELY_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! Optional variables fall back to the defaults of their section.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./lodgely.json` or `./lodgely.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use lodgely_domain::{
    CompletionConfig, Config, DatabaseConfig, LocaleConfig, LodgelyError, LoggingConfig, Result,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `LodgelyError::Config` if configuration cannot be loaded from
/// either source or the file is invalid.
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

/// Load configuration from environment variables
///
/// # Errors
/// Returns `LodgelyError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("LODGELY_DB_PATH")?;
    let db_pool_size = env_var("LODGELY_DB_POOL_SIZE").and_then(|s| {
        s.parse::<u32>().map_err(|e| LodgelyError::Config(format!("Invalid pool size: {}", e)))
    })?;

    let locale_defaults = LocaleConfig::default();
    let site_locales = std::env::var("LODGELY_SITE_LOCALES")
        .ok()
        .map(|s| parse_locales(&s))
        .filter(|locales| !locales.is_empty())
        .unwrap_or(locale_defaults.site_locales);
    let default_locale =
        std::env::var("LODGELY_DEFAULT_LOCALE").unwrap_or(locale_defaults.default_locale);

    let completion_defaults = CompletionConfig::default();
    let min_images = match std::env::var("LODGELY_COMPLETION_MIN_IMAGES") {
        Ok(s) => s.parse::<usize>().map_err(|e| {
            LodgelyError::Config(format!("Invalid completion image count: {}", e))
        })?,
        Err(_) => completion_defaults.min_images,
    };
    let strict = env_bool("LODGELY_COMPLETION_STRICT", completion_defaults.strict);

    let logging_defaults = LoggingConfig::default();
    let level = std::env::var("LODGELY_LOG_LEVEL").unwrap_or(logging_defaults.level);
    let json = env_bool("LODGELY_LOG_JSON", logging_defaults.json);

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        locales: LocaleConfig { site_locales, default_locale },
        completion: CompletionConfig { min_images, strict },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `LodgelyError::Config` if the file is missing, no file is found
/// while probing, or the content is invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LodgelyError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LodgelyError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LodgelyError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LodgelyError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LodgelyError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LodgelyError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, then the directory
/// of the running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("lodgely.json"),
        dir.join("lodgely.toml"),
    ]
}

/// Split a comma-separated locale list, dropping blanks
fn parse_locales(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        LodgelyError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
