//! Error types for the resume CLI.

use std::{env::VarError, io, path::PathBuf, process::ExitCode, result::Result as StdResult};

use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for resume operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that can occur while running the CLI.
///
/// Resume documents never produce errors when malformed; these cover the
/// conditions that genuinely stop a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: TomlError,
    },
    /// A configured width percentage was outside 1-100.
    #[error("Invalid width_percent {value} in {path}; expected 1-100")]
    ConfigWidth {
        /// Path to the config file.
        path: PathBuf,
        /// Rejected value.
        value: u16,
    },
    /// Home directory resolution failed.
    #[error("Failed to resolve the home directory.")]
    HomeDirMissing,
    /// A configured path could not be expanded.
    #[error("Invalid path in config: {path}: {source}")]
    PathExpansion {
        /// Input path that failed to expand.
        path: String,
        /// Underlying expansion error.
        source: shellexpand::LookupError<VarError>,
    },
    /// A resume file exists but could not be read.
    #[error("Failed to read resume at {path}: {source}")]
    ResumeRead {
        /// Path to the resume file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The resume could not be written to a file.
    #[error("Failed to save resume to {path}: {source}")]
    SaveWrite {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Serializing the resume to JSON failed.
    #[error("Failed to serialize resume: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error,
    },
    /// Writing to stdout failed.
    #[error("Failed to write output: {source}")]
    Output {
        /// Underlying IO error.
        source: io::Error,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
