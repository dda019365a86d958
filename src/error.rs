//! Error types.
//!
//! Each domain gets its own enum; `Error` wraps them so handlers can use `?`
//! across layers.

use thiserror::Error;

/// Top-level error for every operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Violations of the credential-helper line protocol, or a request that
/// lacks the fields an operation needs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    /// The line content is deliberately not carried; it may hold a secret.
    #[error("malformed input on line {line}: expected key=value")]
    MalformedLine { line: usize },

    #[error("credential has no host")]
    MissingHost,

    #[error("credential has no password")]
    MissingPassword,

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("value for '{key}' contains a newline")]
    NewlineInValue { key: &'static str },
}

/// Failures reported by, or while talking to, the secret store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret store unavailable: {0}")]
    Unavailable(String),

    #[error("{op} {path} failed: {reason}")]
    OperationFailed {
        op: &'static str,
        path: String,
        reason: String,
    },

    #[error("interrupted")]
    Cancelled,

    #[error("secret store did not respond within {0}s")]
    Timeout(u64),
}

/// Settings and git configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("git config failed: {0}")]
    GitConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
