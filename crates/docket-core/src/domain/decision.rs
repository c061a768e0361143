//! Decision model: what happens to a task after a phase-1 attempt.
//!
//! The Decider is a pure function of `(outcome, attempts, max_attempts)`.
//! Applying the decision (moving the task between queues, bumping its
//! attempt count) is the scheduler's job.

use super::Outcome;
use crate::queue::TaskRecord;

/// The next action for a task that has just been attempted in phase 1.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The attempt passed. The task is resolved.
    Complete,

    /// Transient failure. Put the task back at the front of the primary queue.
    Retry { reason: String },

    /// Persistent failure. Hand the task to the deferred queue.
    Defer { reason: String },
}

pub trait Decider: Send + Sync {
    /// Decide the next action for `task` given the outcome of its latest attempt.
    ///
    /// `task.attempts` is the number of the attempt that produced `outcome`.
    fn decide(&self, task: &TaskRecord, outcome: &Outcome) -> Decision;
}

/// Attempt-bounded decider.
///
/// - Retry while `attempts < max_attempts`
/// - Defer once `attempts >= max_attempts`
///
/// A task is deferred when its attempt count *reaches* the bound, not after
/// exceeding it.
#[derive(Debug, Clone)]
pub struct DefaultDecider {
    max_attempts: u32,
}

impl DefaultDecider {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Decider for DefaultDecider {
    fn decide(&self, task: &TaskRecord, outcome: &Outcome) -> Decision {
        if outcome.is_passed() {
            return Decision::Complete;
        }

        let reason = outcome.reason.clone().unwrap_or_default();
        if task.attempts < self.max_attempts {
            Decision::Retry {
                reason: format!(
                    "attempt {}/{} failed: {reason}",
                    task.attempts, self.max_attempts
                ),
            }
        } else {
            Decision::Defer {
                reason: format!(
                    "persisted through {}/{} attempts: {reason}",
                    task.attempts, self.max_attempts
                ),
            }
        }
    }
}
