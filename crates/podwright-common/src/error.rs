//! Unified error types for the podwright workspace.
//!
//! Every fatal condition funnels into [`PodwrightError`]; the CLI layer
//! renders it as a single terminating diagnostic. Nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PodwrightError {
    /// The pod template could not be read or parsed.
    #[error("cannot load template {path}: {message}")]
    Template {
        /// Path of the template file.
        path: PathBuf,
        /// Description of the read or parse failure.
        message: String,
    },

    /// An image fetch produced no usable identifier.
    #[error("failed to fetch {reference}: {message}")]
    Fetch {
        /// Pull reference handed to the fetcher.
        reference: String,
        /// Description of the fetch failure.
        message: String,
    },

    /// A volume source path could not be made absolute.
    #[error("cannot resolve volume source {path}: {message}")]
    Path {
        /// The offending source path.
        path: PathBuf,
        /// Description of the resolution failure.
        message: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An external command could not be spawned.
    #[error("failed to run {command}: {source}")]
    Spawn {
        /// The command line that failed to start.
        command: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An external command ran but reported failure.
    #[error("{command} {status}")]
    Exec {
        /// The command line that failed.
        command: String,
        /// Exit status reported by the process.
        status: std::process::ExitStatus,
    },

    /// A required external binary is not installed.
    #[error("{binary} not found in PATH: {message}")]
    MissingBinary {
        /// Name of the binary that was looked up.
        binary: String,
        /// Description from the lookup.
        message: String,
    },

    /// No rkt machine could be located for a unit.
    #[error("no rkt machine found for unit {unit}")]
    MachineName {
        /// The systemd unit that was queried.
        unit: String,
    },

    /// A configuration value is invalid or missing.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Manifest serialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PodwrightError>;
