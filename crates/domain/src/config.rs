//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub locales: LocaleConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

/// Locales the site is translated into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub site_locales: Vec<String>,
    pub default_locale: String,
}

/// Profile completeness policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Number of pictures a complete profile shows
    pub min_images: usize,
    /// Strict mode: any description and at least `min_images` pictures
    pub strict: bool,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `lodgely_core=debug`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            site_locales: vec!["en".to_string(), "fr".to_string()],
            default_locale: "en".to_string(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self { min_images: 1, strict: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig { path: "lodgely.db".to_string(), pool_size: 8 },
            locales: LocaleConfig::default(),
            completion: CompletionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
