//! Run parameters.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{Confidence, ConfigError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Phase-1 attempts per shard before it is deferred.
    pub max_attempts: u32,

    /// Confidence used for every phase-1 attempt.
    pub primary_confidence: Confidence,

    /// Confidence used for the single phase-2 attempt.
    pub final_confidence: Confidence,

    /// Pause after each attempt, in milliseconds.
    pub pacing_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            primary_confidence: Confidence::FULL,
            final_confidence: Confidence::SCRUTINY,
            pacing_ms: 0,
        }
    }
}

impl RunConfig {
    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Confidence values are validated on construction; only the attempt
    /// bound can still be wrong here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        Ok(())
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_policy() {
        let c = RunConfig::default();
        assert_eq!(c.max_attempts, 3);
        assert_eq!(c.primary_confidence.value(), 1.0);
        assert_eq!(c.final_confidence.value(), 0.5);
        assert_eq!(c.pacing(), Duration::ZERO);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: RunConfig = serde_json::from_str(r#"{ "max_attempts": 5 }"#).unwrap();
        assert_eq!(c.max_attempts, 5);
        assert_eq!(c.final_confidence, Confidence::SCRUTINY);
    }

    #[test]
    fn out_of_range_confidence_fails_to_parse() {
        let err = serde_json::from_str::<RunConfig>(r#"{ "final_confidence": 1.5 }"#);
        assert!(err.is_err());
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let c = RunConfig {
            max_attempts: 0,
            ..RunConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::ZeroMaxAttempts)));
    }

    #[test]
    fn load_reads_and_validates_file() {
        let path = std::env::temp_dir().join(format!("docket-config-{}.json", ulid::Ulid::new()));
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, r#"{{ "max_attempts": 0 }}"#).unwrap();
        drop(f);

        let err = RunConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMaxAttempts));

        std::fs::write(&path, r#"{ "pacing_ms": 300 }"#).unwrap();
        let c = RunConfig::load(&path).unwrap();
        assert_eq!(c.pacing(), Duration::from_millis(300));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_reports_missing_file() {
        let err = RunConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
