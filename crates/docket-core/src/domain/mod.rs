//! Domain model (ids, shards, verdicts, decisions, events, errors).

pub mod decision;
pub mod errors;
pub mod events;
pub mod ids;
pub mod shard;
pub mod verdict;

pub use decision::{Decider, Decision, DefaultDecider};
pub use errors::{AdjudicationError, BuildError, ConfigError, SinkError};
pub use events::{AttemptEvent, Phase, RunSummary, SchedulerEvent};
pub use ids::{AttemptId, RunId};
pub use shard::{Shard, ShardIndex};
pub use verdict::{Confidence, Outcome, OutcomeKind, Verdict};
