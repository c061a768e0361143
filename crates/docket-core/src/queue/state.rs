//! Task state machine.

use serde::{Deserialize, Serialize};

/// Per-task state within one run.
///
/// State transitions:
/// - Pending -> Attempting -> Completed
/// - Pending -> Attempting -> RetryQueued -> Attempting (loop, bounded by max_attempts)
/// - Pending -> Attempting -> Deferred -> FinalAttempt -> Finalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Created from the shard sequence, not yet attempted.
    Pending,

    /// Phase-1 adjudication in flight.
    Attempting,

    /// Failed transiently, waiting at the front of the primary queue.
    RetryQueued,

    /// Exhausted its primary budget, waiting in the deferred queue.
    Deferred,

    /// Phase-2 adjudication in flight.
    FinalAttempt,

    /// Resolved by a passing phase-1 attempt.
    Completed,

    /// Resolved by the single phase-2 attempt, whatever its outcome.
    Finalized,
}

impl TaskState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Finalized)
    }

    /// Can this task be popped from the primary queue?
    pub fn is_primary_runnable(self) -> bool {
        matches!(self, TaskState::Pending | TaskState::RetryQueued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_completed_and_finalized_are_terminal() {
        let terminal: Vec<_> = [
            TaskState::Pending,
            TaskState::Attempting,
            TaskState::RetryQueued,
            TaskState::Deferred,
            TaskState::FinalAttempt,
            TaskState::Completed,
            TaskState::Finalized,
        ]
        .into_iter()
        .filter(|s| s.is_terminal())
        .collect();

        assert_eq!(terminal, vec![TaskState::Completed, TaskState::Finalized]);
    }
}
