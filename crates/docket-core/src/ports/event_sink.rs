//! EventSink port - where progress and completion events go.

use async_trait::async_trait;

use crate::domain::{SchedulerEvent, SinkError};

/// Receives every event of a run, in order.
///
/// A failing sink never stops a run: the scheduler logs the error and
/// carries on.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: &SchedulerEvent) -> Result<(), SinkError>;
}
