//! ThresholdAdjudicator - deterministic reference adjudicator.

use async_trait::async_trait;

use crate::domain::{AdjudicationError, Confidence, Shard, Verdict};
use crate::ports::Adjudicator;

/// Judges a shard valid when the requested confidence reaches `threshold`.
///
/// The shard content is not inspected. The parity reported is the
/// confidence itself.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdAdjudicator {
    threshold: f64,
}

impl ThresholdAdjudicator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for ThresholdAdjudicator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[async_trait]
impl Adjudicator for ThresholdAdjudicator {
    async fn adjudicate(
        &self,
        _shard: &Shard,
        confidence: Confidence,
    ) -> Result<Verdict, AdjudicationError> {
        let parity = confidence.value();
        Ok(Verdict::new(parity >= self.threshold, parity))
    }
}
