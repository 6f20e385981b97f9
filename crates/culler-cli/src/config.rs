use anyhow::{Context, Result};
use confyg::{env, Confygery};
use culler_core::{GroupBy, Selection};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for twyg::LogLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// Configuration for culler.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CULLER_* prefix)
/// 3. Config file (~/.config/culler/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Albums need strictly more than this fraction of rated tracks to be
    /// recommended.
    ///
    /// Can be set via:
    /// - CLI: --min-percent-rated 0.5
    /// - ENV: CULLER_MIN_PERCENT_RATED
    /// - Config: min_percent_rated = 0.5
    /// - Default: 0.01
    pub min_percent_rated: f64,

    /// Albums with any track rated above this are never recommended.
    ///
    /// Can be set via:
    /// - CLI: --max-rating 2
    /// - ENV: CULLER_MAX_RATING
    /// - Config: max_rating = 2
    /// - Default: 3
    pub max_rating: u8,

    /// How tracks are grouped into albums.
    ///
    /// Can be set via:
    /// - CLI: --group-by album-name
    /// - ENV: CULLER_GROUP_BY
    /// - Config: group_by = "album-name"
    /// - Default: album-and-year
    pub group_by: GroupBy,

    /// Log level. `--verbose` forces `debug`.
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        let selection = Selection::default();
        Self {
            min_percent_rated: selection.min_percent_rated,
            max_rating: selection.max_rating,
            group_by: GroupBy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration using the config file at `config_path`, if it
    /// exists.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("culler");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Selection thresholds, with optional CLI overrides applied.
    pub fn selection(
        &self,
        min_percent_rated: Option<f64>,
        max_rating: Option<u8>,
    ) -> Result<Selection> {
        let selection = Selection::new(
            min_percent_rated.unwrap_or(self.min_percent_rated),
            max_rating.unwrap_or(self.max_rating),
        )?;
        Ok(selection)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/culler/config.toml
/// - macOS: ~/Library/Application Support/culler/config.toml
/// - Windows: %APPDATA%\culler\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("culler")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Culler Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CULLER_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Albums are only recommended when strictly more than this fraction of
# their tracks carry a rating (0.0 - 1.0).
min_percent_rated = 0.01

# Albums are only recommended when no track is rated above this many
# stars (0 - 5).
max_rating = 3

# How tracks are grouped into albums:
# - "album-and-year": same album name and year (default)
# - "album-name": same album name, any year
group_by = "album-and-year"

# One of: trace, debug, info, warn, error
log_level = "info"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file(config_path: &std::path::Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
