//! Error types, one enum per concern.
//!
//! None of these abort a run. `AdjudicationError` is an attempt outcome,
//! `SinkError` is logged and dropped, and `ConfigError` / `BuildError` are
//! raised before a run starts.

use thiserror::Error;

/// Why a single adjudication attempt failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdjudicationError {
    /// The injected failure trigger fired for this attempt.
    #[error("failure trigger fired on attempt {attempt}")]
    Triggered { attempt: u32 },

    /// The adjudicator rejected the request.
    #[error("adjudication rejected: {0}")]
    Rejected(String),

    /// The adjudicator could not be reached or did not answer.
    #[error("adjudicator unavailable: {0}")]
    Unavailable(String),

    /// The adjudicator panicked; the panic was contained.
    #[error("adjudicator panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("confidence {0} is out of range [0.0, 1.0]")]
    ConfidenceOutOfRange(f64),

    #[error("max_attempts must be at least 1")]
    ZeroMaxAttempts,

    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write event: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised by `SchedulerBuilder::build` when the wiring is incomplete.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no adjudicator was provided")]
    MissingAdjudicator,

    #[error("invalid run config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
