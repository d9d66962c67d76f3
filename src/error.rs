//! Error types for pip helper operations.
//!
//! This module defines [`PipError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias for
//! convenience.
//!
//! # Error Handling Strategy
//!
//! - A failed `pip` invocation is always [`PipError::CommandFailed`], carrying
//!   whatever output the child produced
//! - Release lookups report specifier and matching problems as distinct variants
//! - Unexpected lower-level failures (HTTP, JSON) arrive via `PipError::Other`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pip helper operations.
#[derive(Debug, Error)]
pub enum PipError {
    /// The package manager exited non-zero or could not be started.
    #[error("Command failed with exit code {code:?}: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Package specifier could not be parsed.
    #[error(
        "Invalid package descriptor '{specifier}'. Must be like \"foo\", \"foo==1.0\", \"foo>=1.0\", etc."
    )]
    InvalidSpecifier { specifier: String },

    /// The index lists no releases at all for a package.
    #[error("No releases found for package: {package}")]
    NoReleases { package: String },

    /// Releases exist but none satisfy the requested constraints.
    #[error("None of the following releases match the specifiers \"{specifiers}\": {}", .available.join(", "))]
    NoMatchingReleases {
        specifiers: String,
        available: Vec<String>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PipError {
    /// Exit code of the failed command, if this is a command failure that
    /// produced one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PipError::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

/// Result type alias for pip helper operations.
pub type Result<T> = std::result::Result<T, PipError>;
