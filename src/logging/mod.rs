//! File-backed tracing for the command-line host.
//!
//! Search output owns the terminal, so diagnostics go to a log file instead.
//! Follow it with `tail -f` while a session runs.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Why the log sink could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The path has no UTF-8 file name to write to (e.g. `/` or `..`).
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber was installed earlier in this process.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where log lines end up: a directory and a file name inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    /// Directory holding the log file. `.` for a bare file name.
    pub directory: PathBuf,
    /// File name within `directory`.
    pub file_name: String,
}

impl LogTarget {
    /// Split `log_path` into directory and file name.
    ///
    /// # Errors
    ///
    /// [`LoggingError::InvalidPath`] when there is no UTF-8 file name.
    pub fn resolve(log_path: &Path) -> Result<Self, LoggingError> {
        let file_name = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

        let directory = match log_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            directory,
            file_name: file_name.to_string(),
        })
    }
}

/// Install a `fmt` subscriber that appends to `log_path`.
///
/// Honors `RUST_LOG`; anything else falls back to `info`. The directory is
/// created first, so it exists even if installing the subscriber fails.
///
/// # Errors
///
/// See [`LoggingError`].
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let target = LogTarget::resolve(log_path)?;

    std::fs::create_dir_all(&target.directory).map_err(|source| {
        LoggingError::DirectoryCreation {
            path: target.directory.clone(),
            source,
        }
    })?;

    let writer = tracing_appender::rolling::never(&target.directory, &target.file_name);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
