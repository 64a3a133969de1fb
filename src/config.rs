//! Configuration loading and defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown color name: {0}")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub splash: SplashConfig,
    pub content: ContentConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplashConfig {
    /// Shell commands typed out during the splash, in order.
    pub lines: Vec<String>,
    /// Lower bound on total visible duration, in milliseconds.
    pub total_duration_ms: u64,
    /// Fixed per-character interval; derived from the duration when unset.
    pub char_interval_ms: Option<u64>,
    /// Hold after each completed line, in milliseconds.
    pub line_pause_ms: Option<u64>,
    /// Allow any key press to complete the splash early.
    pub skippable: bool,
    /// Prompt chrome shown before each typed command.
    pub prompt_user: String,
    pub prompt_path: String,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            lines: vec!["cd myportfolio".to_string(), "code .".to_string()],
            total_duration_ms: 4600,
            char_interval_ms: None,
            line_pause_ms: None,
            skippable: false,
            prompt_user: "user@portfolio".to_string(),
            prompt_path: "~".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    pub title: String,
    pub body: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            title: "my portfolio".to_string(),
            body: "Welcome. Press q to quit.".to_string(),
        }
    }
}

/// Color names for the semantic roles in [`crate::tui::styles::Theme`].
///
/// Accepts ratatui named colors (`green`, `dark gray`, ...) or `#rrggbb`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub prompt_user: String,
    pub prompt_path: String,
    pub text: String,
    pub cursor: String,
    pub dimmed: String,
    pub border: String,
    pub accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            prompt_user: "green".to_string(),
            prompt_path: "blue".to_string(),
            text: "white".to_string(),
            cursor: "white".to_string(),
            dimmed: "dark gray".to_string(),
            border: "gray".to_string(),
            accent: "cyan".to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present, otherwise the compiled-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                Self::from_file(p)
            }
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("termsplash").join("config.toml"))
    }
}
