//! FailureTrigger port - forced failures for testing and demonstration.

use crate::domain::Shard;

/// Predicate that forces a phase-1 attempt to fail.
///
/// Receives the attempt number so callers can shape failure timing
/// (e.g. "fail the first two attempts only"). The scheduler consults it only
/// while `attempts <= max_attempts`, and never in phase 2.
pub trait FailureTrigger: Send + Sync {
    fn fires(&self, shard: &Shard, attempt: u32) -> bool;
}

impl<F> FailureTrigger for F
where
    F: Fn(&Shard, u32) -> bool + Send + Sync,
{
    fn fires(&self, shard: &Shard, attempt: u32) -> bool {
        self(shard, attempt)
    }
}
