//! Event sinks.
//!
//! - `NoopSink`: drops everything (builder default)
//! - `MemorySink`: keeps events for inspection
//! - `TracingSink`: one log line per event
//! - `JsonLinesSink`: one JSON object per line on any writer

use std::io::Write;
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{SchedulerEvent, SinkError};
use crate::ports::EventSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

#[async_trait]
impl EventSink for NoopSink {
    async fn emit(&self, _event: &SchedulerEvent) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Collects every event in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<SchedulerEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<SchedulerEvent> {
        self.events.lock().await.clone()
    }

    pub async fn clear(&self) {
        self.events.lock().await.clear();
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn emit(&self, event: &SchedulerEvent) -> Result<(), SinkError> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}

/// Logs events through `tracing`, in the shape of a progress console.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl EventSink for TracingSink {
    async fn emit(&self, event: &SchedulerEvent) -> Result<(), SinkError> {
        match event {
            SchedulerEvent::RunStarted {
                run_id,
                total_shards,
                ..
            } => {
                tracing::info!(%run_id, total_shards, "processing shards");
            }
            SchedulerEvent::Attempt(a) => {
                tracing::info!(
                    run_id = %a.run_id,
                    index = %a.index,
                    attempt = a.attempt,
                    phase = ?a.phase,
                    confidence = %a.confidence,
                    "{}",
                    a.outcome
                );
            }
            SchedulerEvent::Retried {
                index,
                next_attempt,
                reason,
                ..
            } => {
                tracing::warn!(%index, next_attempt, %reason, "re-queued for immediate retry");
            }
            SchedulerEvent::Deferred {
                index,
                attempts,
                reason,
                ..
            } => {
                tracing::warn!(%index, attempts, %reason, "moved to deferred queue");
            }
            SchedulerEvent::PhaseShift { deferred, .. } => {
                tracing::info!(deferred, "primary queue drained, finalizing deferred shards");
            }
            SchedulerEvent::RunCompleted {
                run_id, summary, ..
            } => {
                tracing::info!(
                    %run_id,
                    completed = summary.completed,
                    finalized = summary.finalized,
                    total_attempts = summary.total_attempts,
                    "run complete"
                );
            }
        }
        Ok(())
    }
}

/// Writes each event as a single JSON line and flushes.
pub struct JsonLinesSink<W> {
    writer: StdMutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: StdMutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    async fn emit(&self, event: &SchedulerEvent) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut writer = match self.writer.lock() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        };
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}
