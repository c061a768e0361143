//! Task record: shard + scheduling metadata.

use super::TaskState;
use crate::domain::{Outcome, Shard, ShardIndex};

/// A shard moving through one run.
///
/// Design:
/// - The shard (index + content) is fixed at creation.
/// - `attempts` and `state` only change through the methods below, which
///   assert the transition is legal.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub shard: Shard,
    pub state: TaskState,

    /// Number of the attempt being made (or about to be made). Starts at 1
    /// and grows by exactly one per requeue.
    pub attempts: u32,

    /// Reason of the most recent failed attempt.
    pub last_failure: Option<String>,
}

impl TaskRecord {
    pub fn new(shard: Shard) -> Self {
        Self {
            shard,
            state: TaskState::Pending,
            attempts: 1,
            last_failure: None,
        }
    }

    pub fn index(&self) -> ShardIndex {
        self.shard.index()
    }

    /// Pending | RetryQueued -> Attempting
    pub fn start_attempt(&mut self) {
        debug_assert!(self.state.is_primary_runnable(), "{:?}", self.state);
        self.state = TaskState::Attempting;
    }

    /// Attempting -> Completed
    pub fn mark_completed(&mut self) {
        debug_assert_eq!(self.state, TaskState::Attempting);
        self.state = TaskState::Completed;
    }

    /// Attempting -> RetryQueued, bumping the attempt count.
    pub fn schedule_retry(&mut self, failure: String) {
        debug_assert_eq!(self.state, TaskState::Attempting);
        self.state = TaskState::RetryQueued;
        self.attempts += 1;
        self.last_failure = Some(failure);
    }

    /// Attempting -> Deferred, bumping the attempt count one last time.
    pub fn defer(&mut self, failure: String) {
        debug_assert_eq!(self.state, TaskState::Attempting);
        self.state = TaskState::Deferred;
        self.attempts += 1;
        self.last_failure = Some(failure);
    }

    /// Deferred -> FinalAttempt
    pub fn start_final_attempt(&mut self) {
        debug_assert_eq!(self.state, TaskState::Deferred);
        self.state = TaskState::FinalAttempt;
    }

    /// FinalAttempt -> Finalized
    pub fn mark_finalized(&mut self, outcome: &Outcome) {
        debug_assert_eq!(self.state, TaskState::FinalAttempt);
        self.state = TaskState::Finalized;
        if !outcome.is_passed() {
            self.last_failure = outcome.reason.clone();
        }
    }
}
