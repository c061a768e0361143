//! RunReport - what a finished run hands back to its caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Outcome, RunId, RunSummary, ShardIndex};

/// Which terminal state a task reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Passed in phase 1.
    Completed,

    /// Resolved by the single phase-2 attempt.
    Finalized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResolution {
    pub index: ShardIndex,
    pub resolution: Resolution,

    /// Attempt count when the task was resolved. For finalized tasks this is
    /// `max_attempts + 1`.
    pub attempts: u32,

    /// Outcome of the resolving attempt.
    pub outcome: Outcome,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,

    /// In resolution order.
    pub resolutions: Vec<TaskResolution>,
    pub summary: RunSummary,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn completed(&self) -> impl Iterator<Item = &TaskResolution> {
        self.with(Resolution::Completed)
    }

    pub fn finalized(&self) -> impl Iterator<Item = &TaskResolution> {
        self.with(Resolution::Finalized)
    }

    pub fn resolution_of(&self, index: ShardIndex) -> Option<&TaskResolution> {
        self.resolutions.iter().find(|r| r.index == index)
    }

    fn with(&self, resolution: Resolution) -> impl Iterator<Item = &TaskResolution> {
        self.resolutions
            .iter()
            .filter(move |r| r.resolution == resolution)
    }
}
