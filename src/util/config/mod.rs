//! termcalc configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Config file given with --config
//! 3. User-level (~/.config/termcalc/config.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use termcalc::util::config::UserConfig;
//!
//! let config: UserConfig = toml::from_str("[repl]\nprompt = \"> \"").unwrap();
//! assert_eq!(config.repl.prompt, "> ");
//! assert_eq!(config.history.show_limit, 10);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::history::FileHistory;
use crate::util::logger::LogLevel;

/// User-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserConfig {
    /// REPL settings
    #[serde(default)]
    pub repl: ReplConfig,
    /// Calculation history settings
    #[serde(default)]
    pub history: HistoryConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// REPL configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Colour error messages
    #[serde(default = "default_colors")]
    pub colors: bool,
    /// Vi key bindings instead of emacs
    #[serde(default)]
    pub vi_mode: bool,
    /// Line-editor history file (keystroke recall, not calculations)
    #[serde(default)]
    pub input_history_file: Option<PathBuf>,
    /// Line-editor history size
    #[serde(default = "default_input_history_size")]
    pub input_history_size: usize,
}

fn default_prompt() -> String {
    "calc> ".to_string()
}

fn default_colors() -> bool {
    true
}

fn default_input_history_size() -> usize {
    1000
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            colors: true,
            vi_mode: false,
            input_history_file: None,
            input_history_size: 1000,
        }
    }
}

/// Calculation history configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Record calculations at all
    #[serde(default = "default_history_enabled")]
    pub enabled: bool,
    /// History file; defaults to ~/.calc_history/history.txt
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Entries shown by the `history` command
    #[serde(default = "default_show_limit")]
    pub show_limit: usize,
}

fn default_history_enabled() -> bool {
    true
}

fn default_show_limit() -> usize {
    10
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
            show_limit: 10,
        }
    }
}

impl HistoryConfig {
    /// Configured file, else the default location
    pub fn resolve_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(FileHistory::default_path)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("termcalc"));
    }

    // Fallback to ~/.config/termcalc
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("termcalc"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("termcalc"));
    }

    None
}

/// Get the user config file path (~/.config/termcalc/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Save user-level configuration
pub fn save_user_config(config: &UserConfig) -> Result<(), ConfigError> {
    let dir = get_config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_config_to(config, &dir.join("config.toml"))
}

/// Save configuration to an explicit file, creating its directory
pub fn save_config_to(
    config: &UserConfig,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(ConfigError::Io)?;
        }
    }

    let content = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(path, content).map_err(ConfigError::Io)?;

    Ok(())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(toml::ser::Error),
    #[error("Cannot determine config directory")]
    NoConfigDir,
}
