//! Typed errors for the failure kinds callers need to tell apart.
//!
//! Everything else travels as `anyhow::Error` with context attached at the call site. Every
//! error is fatal: the export stops at the first failure and leaves whatever it already wrote
//! on disk.

use thiserror::Error;

/// Problems with the invocation itself, reported with guidance and exit status 2
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the token flag is required (see: https://api.slack.com/web)")]
    MissingToken,
    #[error("the token you used is not valid")]
    InvalidToken(#[source] ApiError),
    #[error("invalid API URL '{0}'")]
    InvalidApiUrl(String),
}

/// Failures of a remote call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {method} failed")]
    Transport {
        method: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} returned HTTP {status}")]
    Status { method: &'static str, status: u16 },
    #[error("{method} returned error: {error}")]
    Slack { method: &'static str, error: String },
    #[error("malformed {method} response")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Malformed `ts` values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp '{0}' has more than one '.'")]
    TooManyDots(String),
    #[error("timestamp '{0}' has a non-numeric seconds component")]
    InvalidSeconds(String),
    #[error("timestamp '{0}' is out of range")]
    OutOfRange(String),
}

/// Room names that cannot be used as a directory inside the export root
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("room name is empty")]
    Empty,
    #[error("room name '{0}' contains a path separator")]
    Separator(String),
    #[error("room name '{0}' is a relative path component")]
    Relative(String),
}
