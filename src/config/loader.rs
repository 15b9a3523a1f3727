//! Configuration file loading with precedence handling.

use crate::config::KeyBindings;
use crate::search::{ModeChange, SearchMode};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CHATFIND_CONFIG";

/// Environment variable overriding the log file path.
pub const LOG_FILE_ENV_VAR: &str = "CHATFIND_LOG_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/chatfind/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Default find-bar flags.
    #[serde(default)]
    pub search: Option<SearchSection>,

    /// Command key overrides.
    #[serde(default)]
    pub keybindings: Option<KeyBindingsSection>,
}

/// `[search]` section: default mode flags for a new find bar.
///
/// ```toml
/// [search]
/// case_sensitive = true
/// regex = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    /// Match case.
    #[serde(default)]
    pub case_sensitive: Option<bool>,
    /// Match whole words only.
    #[serde(default)]
    pub whole_word: Option<bool>,
    /// Treat the pattern as a regular expression. Wins over `whole_word`.
    #[serde(default)]
    pub regex: Option<bool>,
}

impl From<&SearchSection> for ModeChange {
    fn from(section: &SearchSection) -> Self {
        ModeChange {
            case_sensitive: section.case_sensitive,
            whole_word: section.whole_word,
            regex: section.regex,
        }
    }
}

/// `[keybindings]` section: one command key per find-bar action.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeyBindingsSection {
    /// Next occurrence.
    #[serde(default)]
    pub next: Option<String>,
    /// Previous occurrence.
    #[serde(default)]
    pub previous: Option<String>,
    /// Toggle match case.
    #[serde(default)]
    pub toggle_case: Option<String>,
    /// Toggle match word.
    #[serde(default)]
    pub toggle_word: Option<String>,
    /// Toggle regex.
    #[serde(default)]
    pub toggle_regex: Option<String>,
    /// Re-run the search.
    #[serde(default)]
    pub refresh: Option<String>,
    /// Close the find bar.
    #[serde(default)]
    pub close: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Flags a new find bar starts with.
    pub default_mode: SearchMode,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Interactive command bindings.
    pub keybindings: KeyBindings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_mode: SearchMode::default(),
            log_file_path: default_log_path(),
            keybindings: KeyBindings::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/chatfind/chatfind.log` on Unix-like systems, or the
/// platform's state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("chatfind").join("chatfind.log")
    } else {
        PathBuf::from("chatfind.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/chatfind/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chatfind").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CHATFIND_CONFIG` environment variable
/// 3. Default path `~/.config/chatfind/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `CHATFIND_CONFIG` is set to something that is not valid UTF-8.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()))
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let mut default_mode = defaults.default_mode;
    if let Some(section) = &config.search {
        default_mode.apply(section.into());
    }

    let keybindings = match &config.keybindings {
        Some(section) => defaults.keybindings.with_overrides(section),
        None => defaults.keybindings,
    };

    ResolvedConfig {
        default_mode,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CHATFIND_LOG_FILE`: Override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(LOG_FILE_ENV_VAR) {
        if !path.trim().is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually passed
/// should be `Some` in `mode_override`.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, mode_override: ModeChange) -> ResolvedConfig {
    config.default_mode.apply(mode_override);
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
