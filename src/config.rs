//! Configuration file handling for reviews-carousel.
//!
//! Loads configuration from `<config dir>/reviews-carousel/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;
use crate::carousel::CarouselSettings;
use crate::reviews::{default_reviews, Review};

/// Configuration file structure for reviews-carousel.
/// Loaded from the platform config dir (or custom path via --config).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            stagger_ms: default_stagger_ms(),
            swipe_threshold: default_swipe_threshold(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl CarouselConfig {
    /// Controller tunables. The swipe threshold is clamped to 0.0..=1.0.
    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            auto_advance: Duration::from_millis(self.auto_advance_ms.max(1)),
            stagger: Duration::from_millis(self.stagger_ms),
            swipe_threshold: self.swipe_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { status_bar: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_auto_advance_ms() -> u64 {
    5000
}

fn default_stagger_ms() -> u64 {
    50
}

fn default_swipe_threshold() -> f64 {
    0.2
}

fn default_transition_ms() -> u64 {
    800
}

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CAROUSEL_API_URL";

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::info!("loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Reviews to show: the configured ones, or the built-in set.
    pub fn reviews_or_default(&self) -> Vec<Review> {
        if self.reviews.is_empty() {
            default_reviews()
        } else {
            self.reviews.clone()
        }
    }

    /// API base URL: `$CAROUSEL_API_URL`, then `[api] base_url`, then the default.
    pub fn api_base_url(&self) -> String {
        std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config file already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("reviews-carousel").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/reviews-carousel/config.toml")
        })
}

/// Commented template written by `config init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# reviews-carousel configuration

[carousel]
# Auto-advance period in milliseconds
auto_advance_ms = 5000
# Per-slide delay for staggered highlight (ms)
stagger_ms = 50
# Fraction of the viewport a drag must cross to change slides
swipe_threshold = 0.2
# Eased slide transition length (ms)
transition_ms = 800

[ui]
# Show status bar
status_bar = true

[api]
# Users/data service (overridden by $CAROUSEL_API_URL)
# base_url = "http://localhost:3000"

# Reviews shown on the carousel (built-in samples when none are listed)
# [[reviews]]
# author = "Maya Chen"
# role = "Product Lead"
# text = "The redesign landed on time."
# rating = 5
"#;

/// Write the default config template to `path`, creating parent directories.
///
/// Refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}
