//! Events emitted to an `EventSink` during a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AttemptId, Confidence, Outcome, RunId, ShardIndex};

/// Which queue an attempt was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Primary queue, normal confidence, bounded retries.
    Primary,

    /// Deferred queue, reduced confidence, exactly one attempt.
    Final,
}

/// One adjudication attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptEvent {
    pub run_id: RunId,
    pub attempt_id: AttemptId,
    pub index: ShardIndex,

    /// 1-based attempt number for this shard.
    pub attempt: u32,
    pub phase: Phase,
    pub confidence: Confidence,
    pub outcome: Outcome,
    pub at: DateTime<Utc>,
}

/// Aggregate counts reported once a run has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_shards: usize,
    pub completed: usize,
    pub finalized: usize,
    pub retries: usize,
    pub total_attempts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SchedulerEvent {
    RunStarted {
        run_id: RunId,
        total_shards: usize,
        at: DateTime<Utc>,
    },

    Attempt(AttemptEvent),

    /// A failed task was pushed back to the front of the primary queue.
    Retried {
        run_id: RunId,
        index: ShardIndex,
        next_attempt: u32,
        reason: String,
    },

    /// A task exhausted its primary budget and moved to the deferred queue.
    Deferred {
        run_id: RunId,
        index: ShardIndex,
        attempts: u32,
        reason: String,
    },

    /// The primary queue drained and deferred shards are about to be finalized.
    PhaseShift {
        run_id: RunId,
        deferred: usize,
        at: DateTime<Utc>,
    },

    RunCompleted {
        run_id: RunId,
        summary: RunSummary,
        at: DateTime<Utc>,
    },
}

impl SchedulerEvent {
    pub fn run_id(&self) -> RunId {
        match self {
            SchedulerEvent::RunStarted { run_id, .. }
            | SchedulerEvent::Retried { run_id, .. }
            | SchedulerEvent::Deferred { run_id, .. }
            | SchedulerEvent::PhaseShift { run_id, .. }
            | SchedulerEvent::RunCompleted { run_id, .. } => *run_id,
            SchedulerEvent::Attempt(a) => a.run_id,
        }
    }

    pub fn as_attempt(&self) -> Option<&AttemptEvent> {
        match self {
            SchedulerEvent::Attempt(a) => Some(a),
            _ => None,
        }
    }
}
