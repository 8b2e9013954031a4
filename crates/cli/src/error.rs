// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::pattern::PatternError;
use crate::template::TemplateError;

/// linkify-tracking error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A carrier pattern failed to compile.
    #[error("carrier `{carrier}`: {source}")]
    Pattern {
        carrier: String,
        #[source]
        source: PatternError,
    },

    /// A carrier URL template is malformed.
    #[error("carrier `{carrier}`: {source}")]
    Template {
        carrier: String,
        #[source]
        source: TemplateError,
    },

    /// A carrier definition is structurally invalid.
    #[error("invalid carrier: {0}")]
    Carrier(String),
}

/// Result type using the crate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every input was recognized (or nothing needed recognizing)
    Success = 0,
    /// At least one input matched no carrier
    NoMatch = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Pattern { .. } | Error::Template { .. } | Error::Carrier(_) => {
                ExitCode::ConfigError
            }
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
