//! Configuration management for deck.
//!
//! Loads configuration from ${DECK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for deck configuration and log directories.
    //!
    //! DECK_HOME resolution order:
    //! 1. DECK_HOME environment variable (if set)
    //! 2. ~/.config/deck (default)
    //! 3. ./.deck when no home directory is known

    use std::env;
    use std::path::PathBuf;

    /// Returns the deck home directory.
    pub fn deck_home() -> PathBuf {
        if let Ok(home) = env::var("DECK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".deck"),
            |h| h.join(".config").join("deck"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        deck_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn log_dir() -> PathBuf {
        deck_home().join("logs")
    }
}

/// Swipe/drag tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum travel (exclusive) before a gesture moves a slide.
    /// Mouse drags in the terminal are measured in columns.
    pub threshold: f64,
    /// Advance on rightward travel instead of leftward.
    pub invert: bool,
}

impl GestureConfig {
    pub const DEFAULT_THRESHOLD: f64 = 50.0;

    /// Rejects thresholds a gesture could not be compared against.
    ///
    /// With a negative threshold every zero-distance click resolves as a
    /// swipe.
    ///
    /// # Errors
    /// Returns an error if `threshold` is not a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            anyhow::bail!(
                "gesture.threshold must be a finite number >= 0, got {}",
                self.threshold
            );
        }
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            invert: false,
        }
    }
}

/// Which auxiliary fragments the viewer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub show_outline: bool,
    pub show_dots: bool,
    pub show_progress: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_outline: true,
            show_dots: true,
            show_progress: true,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `DECK_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gesture: GestureConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Commented template written by `deck config init`.
fn default_config_template() -> &'static str {
    include_str!("default_config.toml")
}

impl Config {
    /// Loads configuration from the default path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            config
                .gesture
                .validate()
                .with_context(|| format!("Invalid config in {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
