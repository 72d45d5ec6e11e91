//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`PacrepoError`] which covers every failure mode of the
//! pacrepo core: reading and rewriting `pacman.conf`, running the database
//! refresh command, loading settings and driving the terminal. It uses
//! `thiserror` for the error definitions and provides constructors for the
//! variants that carry context.
//!
//! # Public API
//! - [`PacrepoError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PacrepoError>`
//!
//! # Error Categories
//! - **Configuration file**: missing file, read and write failures
//! - **Synchronization**: refresh command could not start or exited non-zero
//! - **Process**: missing root privileges, terminal I/O
//! - **Settings**: unreadable or malformed settings file

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Domain-specific error types for pacrepo
#[derive(Error, Debug)]
pub enum PacrepoError {
    // Configuration file errors
    #[error("pacman config not found at {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to overwrite {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not stage changes in a temporary file: {source}")]
    TempFileFailed { source: std::io::Error },

    // Synchronization errors
    #[error("`{command}` failed: {status}\nOutput:\n{output}")]
    SyncFailed {
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("could not run `{command}`: {source}")]
    SyncSpawnFailed {
        command: String,
        source: std::io::Error,
    },

    // Process errors
    #[error("This program must be run as root to modify the pacman configuration")]
    NotRoot,

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    // Command argument errors
    #[error("Unknown repository: '{name}'. Run 'pacrepo list' to see available repositories")]
    UnknownRepository { name: String },

    #[error("No repository names provided")]
    NoRepositoriesGiven,

    // Settings errors
    #[error("Failed to read settings file '{}': {source}", path.display())]
    SettingsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{}': {source}", path.display())]
    SettingsParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PacrepoError
pub type Result<T> = std::result::Result<T, PacrepoError>;

impl PacrepoError {
    /// Map an I/O error raised while reading `path`, keeping "not found" distinct
    pub fn from_read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ConfigNotFound { path }
        } else {
            Self::ReadFailed { path, source }
        }
    }

    /// Create a write failed error
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a temp file staging error
    pub fn temp_file_failed(source: std::io::Error) -> Self {
        Self::TempFileFailed { source }
    }

    /// Create a sync failure carrying the command's captured output
    pub fn sync_failed(
        command: impl Into<String>,
        status: ExitStatus,
        output: impl Into<String>,
    ) -> Self {
        Self::SyncFailed {
            command: command.into(),
            status,
            output: output.into(),
        }
    }

    /// Create a sync spawn failure
    pub fn sync_spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SyncSpawnFailed {
            command: command.into(),
            source,
        }
    }

    /// Create an unknown repository error
    pub fn unknown_repository(name: impl Into<String>) -> Self {
        Self::UnknownRepository { name: name.into() }
    }

    /// Create a settings read error
    pub fn settings_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings parse error
    pub fn settings_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParseFailed {
            path: path.into(),
            source,
        }
    }

    /// True when the configuration file itself is missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }
}
