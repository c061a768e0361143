//! ShardSource port - raw input to ordered content fragments.

/// Splits raw text into shards.
///
/// Must be deterministic with respect to its input. Called once per run.
pub trait ShardSource: Send + Sync {
    fn split(&self, raw: &str) -> Vec<String>;
}
