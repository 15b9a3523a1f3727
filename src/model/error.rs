//! Error types for chatfind.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the command-line host
//!   - [`InputError`] - Transcript file reading failures (file not found, IO)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing initialization failures
//! - [`SearchError`] - The only error originating in the search core
//! - [`ParseError`] - Malformed transcript lines
//!
//! # Error Recovery Strategy
//!
//! Neither `SearchError` nor `ParseError` is fatal. A bad pattern becomes a
//! user-visible warning and leaves the current matches untouched; a malformed
//! transcript line is logged and skipped. Input, config and logging errors
//! propagate to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error for the command-line host.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the transcript file.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Failed to load the configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to install the tracing subscriber.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal I/O failed while printing results or reading commands.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Failed to serialize the JSON report.
    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Errors raised by the match finder.
///
/// # Recovery
///
/// The navigation controller catches this, forwards it to the host as a
/// warning and keeps its previous matches. It never reaches `main`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern could not be compiled as a regular expression.
    ///
    /// Also raised for the bare `\` pattern, which is rejected before
    /// compilation is attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatfind::model::error::SearchError;
    ///
    /// let err = SearchError::BadPattern {
    ///     pattern: "(".to_string(),
    ///     reason: "unclosed group".to_string(),
    /// };
    /// assert!(err.to_string().contains("Bad pattern"));
    /// ```
    #[error("Bad pattern {pattern:?}: {reason}")]
    BadPattern {
        /// The pattern exactly as submitted.
        pattern: String,
        /// Compiler diagnostic, or a fixed reason for rejected patterns.
        reason: String,
    },
}

/// Errors encountered when reading a transcript from disk.
#[derive(Debug, Error)]
pub enum InputError {
    /// The transcript file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use chatfind::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Any other I/O failure (permissions, invalid UTF-8, disk errors).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A transcript line that could not be turned into a message.
///
/// Non-fatal: the line is logged and skipped, the remaining lines still load.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid message at line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number in the transcript file.
    pub line: usize,
    /// The JSON parser's diagnostic.
    pub reason: String,
}
