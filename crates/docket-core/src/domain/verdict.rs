//! Verdict model: what an adjudication attempt produced.
//!
//! Kept free of queue concerns. These are the shapes that end up in events
//! and in the run report.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ConfigError;

/// Confidence level an adjudication is performed at, in `[0.0, 1.0]`.
///
/// Deserializes through `TryFrom<f64>` so a config file can never carry an
/// out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Normal phase-1 confidence.
    pub const FULL: Confidence = Confidence(1.0);

    /// Reduced confidence (heightened scrutiny) used for deferred shards.
    pub const SCRUTINY: Confidence = Confidence(0.5);

    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ConfidenceOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Result of a successful adjudication call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the shard was judged valid.
    pub valid: bool,

    /// Score reported alongside the verdict.
    pub parity: f64,
}

impl Verdict {
    pub fn new(valid: bool, parity: f64) -> Self {
        Self { valid, parity }
    }
}

/// Classification of an attempt. Serialized as `PASSED` / `FAILED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeKind {
    Passed,
    Failed,
}

/// What one attempt produced: a verdict, or the reason it failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Outcome {
    pub fn passed(verdict: Verdict) -> Self {
        Self {
            kind: OutcomeKind::Passed,
            verdict: Some(verdict),
            reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Failed,
            verdict: None,
            reason: Some(reason.into()),
        }
    }

    pub fn is_passed(&self) -> bool {
        self.kind == OutcomeKind::Passed
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.verdict, &self.reason) {
            (Some(v), _) => write!(f, "PARITY: {} ({:.4})", v.valid, v.parity),
            (None, Some(reason)) => write!(f, "FAILED: {reason}"),
            (None, None) => write!(f, "FAILED"),
        }
    }
}
