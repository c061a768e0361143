//! Adjudicator port.

use async_trait::async_trait;

use crate::domain::{AdjudicationError, Confidence, Shard, Verdict};

/// Validity check performed against a shard at a given confidence level.
///
/// The scheduler calls this once per attempt and awaits it before doing
/// anything else; there is no timeout. A returned `Err` is an ordinary
/// failed attempt, and so is a panic.
#[async_trait]
pub trait Adjudicator: Send + Sync {
    async fn adjudicate(
        &self,
        shard: &Shard,
        confidence: Confidence,
    ) -> Result<Verdict, AdjudicationError>;
}
