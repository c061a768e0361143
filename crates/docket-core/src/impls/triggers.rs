//! Built-in failure triggers.

use crate::domain::Shard;
use crate::ports::FailureTrigger;

/// Marker recognised by `MarkerTrigger::default()`.
pub const DEFAULT_MARKER: &str = "ERROR_TEST";

/// Fires on every attempt of a shard whose content contains `marker`.
///
/// With the default scheduler bound this defers every marked shard.
#[derive(Debug, Clone)]
pub struct MarkerTrigger {
    marker: String,
}

impl MarkerTrigger {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for MarkerTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl FailureTrigger for MarkerTrigger {
    fn fires(&self, shard: &Shard, _attempt: u32) -> bool {
        !self.marker.is_empty() && shard.content().contains(&self.marker)
    }
}

/// Never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTrigger;

impl FailureTrigger for NeverTrigger {
    fn fires(&self, _shard: &Shard, _attempt: u32) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShardIndex;

    fn shard(s: &str) -> Shard {
        Shard::new(ShardIndex::new(0), s)
    }

    #[test]
    fn marker_matches_substring_on_any_attempt() {
        let t = MarkerTrigger::default();
        assert!(t.fires(&shard("before ERROR_TEST after"), 1));
        assert!(t.fires(&shard("ERROR_TEST"), 99));
        assert!(!t.fires(&shard("error_test"), 1));
    }

    #[test]
    fn empty_marker_never_fires() {
        assert!(!MarkerTrigger::new("").fires(&shard("anything"), 1));
    }

    #[test]
    fn closures_are_triggers() {
        let first_two = |_: &Shard, attempt: u32| attempt <= 2;
        assert!(first_two.fires(&shard("x"), 2));
        assert!(!first_two.fires(&shard("x"), 3));
        assert!(!NeverTrigger.fires(&shard("ERROR_TEST"), 1));
    }
}
