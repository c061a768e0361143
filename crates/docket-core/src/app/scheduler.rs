//! RetryScheduler - the two-phase run loop.
//!
//! # Flow
//! 1. Build one task per shard, in order, on the primary queue.
//! 2. Phase 1: pop front, adjudicate at the primary confidence, let the
//!    decider choose complete / retry-at-front / defer. Drain to empty.
//! 3. Phase 2: for each deferred task, one adjudication at the final
//!    confidence. Whatever comes back is recorded. No requeue.
//! 4. Emit the completion event and return the report.
//!
//! Nothing in here returns an error. A run always ends with every shard in
//! a terminal state.

use std::any::Any;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::report::{Resolution, RunReport, TaskResolution};
use crate::config::RunConfig;
use crate::domain::{
    AdjudicationError, AttemptEvent, Confidence, Decider, Decision, DefaultDecider, Outcome, Phase,
    RunId, RunSummary, SchedulerEvent, Shard, ShardIndex,
};
use crate::ports::{Adjudicator, Clock, EventSink, FailureTrigger, IdGenerator, ShardSource};
use crate::queue::{DeferredQueue, PrimaryQueue, TaskRecord};

/// Drives shards through adjudication. Reusable across runs; each call to
/// `run` owns its queues for exactly that run.
pub struct RetryScheduler {
    pub(super) config: RunConfig,
    pub(super) decider: DefaultDecider,
    pub(super) adjudicator: Arc<dyn Adjudicator>,
    pub(super) trigger: Arc<dyn FailureTrigger>,
    pub(super) sink: Arc<dyn EventSink>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn IdGenerator>,
}

/// Per-run state. Dropped when the run returns.
struct RunState {
    run_id: RunId,
    primary: PrimaryQueue,
    deferred: DeferredQueue,
    resolutions: Vec<TaskResolution>,
    summary: RunSummary,
}

impl RunState {
    fn resolve(&mut self, task: TaskRecord, resolution: Resolution, outcome: Outcome) {
        debug_assert!(task.state.is_terminal());
        match resolution {
            Resolution::Completed => self.summary.completed += 1,
            Resolution::Finalized => self.summary.finalized += 1,
        }
        self.resolutions.push(TaskResolution {
            index: task.index(),
            resolution,
            attempts: task.attempts,
            outcome,
            last_failure: task.last_failure,
        });
    }
}

impl RetryScheduler {
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Split `raw` with `source` (once) and run the resulting shards.
    pub async fn run_source(&self, source: &dyn ShardSource, raw: &str) -> RunReport {
        self.run(source.split(raw)).await
    }

    /// Run one scheduling pass over `shards`, in the given order.
    pub async fn run<I, S>(&self, shards: I) -> RunReport
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let run_id = self.ids.generate_run_id();
        let started_at = self.clock.now();

        let shards: Vec<Shard> = shards
            .into_iter()
            .enumerate()
            .map(|(i, content)| Shard::new(ShardIndex::new(i), content))
            .collect();
        let total_shards = shards.len();

        let mut run = RunState {
            run_id,
            primary: PrimaryQueue::from_shards(shards),
            deferred: DeferredQueue::new(),
            resolutions: Vec::with_capacity(total_shards),
            summary: RunSummary {
                total_shards,
                ..RunSummary::default()
            },
        };

        tracing::info!(%run_id, total_shards, max_attempts = self.config.max_attempts, "run started");
        self.emit(SchedulerEvent::RunStarted {
            run_id,
            total_shards,
            at: started_at,
        })
        .await;

        self.drain_primary(&mut run).await;

        if !run.deferred.is_empty() {
            self.finalize_deferred(&mut run).await;
        }

        let finished_at = self.clock.now();
        tracing::info!(
            %run_id,
            completed = run.summary.completed,
            finalized = run.summary.finalized,
            total_attempts = run.summary.total_attempts,
            "run complete"
        );
        self.emit(SchedulerEvent::RunCompleted {
            run_id,
            summary: run.summary.clone(),
            at: finished_at,
        })
        .await;

        RunReport {
            run_id,
            resolutions: run.resolutions,
            summary: run.summary,
            started_at,
            finished_at,
        }
    }

    /// Phase 1.
    async fn drain_primary(&self, run: &mut RunState) {
        let confidence = self.config.primary_confidence;

        while let Some(mut task) = run.primary.pop_front() {
            task.start_attempt();

            let outcome = self.attempt_primary(&task, confidence).await;
            self.record_attempt(run, &task, Phase::Primary, confidence, &outcome)
                .await;

            match self.decider.decide(&task, &outcome) {
                Decision::Complete => {
                    task.mark_completed();
                    run.resolve(task, Resolution::Completed, outcome);
                }
                Decision::Retry { reason } => {
                    task.schedule_retry(outcome.reason.unwrap_or_default());
                    run.summary.retries += 1;
                    tracing::warn!(index = %task.index(), next_attempt = task.attempts, %reason, "retrying immediately");
                    self.emit(SchedulerEvent::Retried {
                        run_id: run.run_id,
                        index: task.index(),
                        next_attempt: task.attempts,
                        reason,
                    })
                    .await;
                    run.primary.push_front(task);
                }
                Decision::Defer { reason } => {
                    task.defer(outcome.reason.unwrap_or_default());
                    tracing::warn!(index = %task.index(), attempts = task.attempts, %reason, "deferring");
                    self.emit(SchedulerEvent::Deferred {
                        run_id: run.run_id,
                        index: task.index(),
                        attempts: task.attempts,
                        reason,
                    })
                    .await;
                    run.deferred.push_back(task);
                }
            }

            self.pace().await;
        }
    }

    /// Phase 2. Only called with a non-empty deferred queue.
    async fn finalize_deferred(&self, run: &mut RunState) {
        let confidence = self.config.final_confidence;
        let deferred = run.deferred.len();

        tracing::info!(run_id = %run.run_id, deferred, "primary queue drained, finalizing deferred shards");
        self.emit(SchedulerEvent::PhaseShift {
            run_id: run.run_id,
            deferred,
            at: self.clock.now(),
        })
        .await;

        while let Some(mut task) = run.deferred.pop_front() {
            task.start_final_attempt();

            let outcome = self.adjudicate(&task.shard, confidence).await;
            self.record_attempt(run, &task, Phase::Final, confidence, &outcome)
                .await;

            task.mark_finalized(&outcome);
            run.resolve(task, Resolution::Finalized, outcome);

            self.pace().await;
        }
    }

    /// One phase-1 attempt. The trigger short-circuits the adjudicator.
    async fn attempt_primary(&self, task: &TaskRecord, confidence: Confidence) -> Outcome {
        let attempt = task.attempts;
        if attempt <= self.config.max_attempts && self.trigger.fires(&task.shard, attempt) {
            return Outcome::failed(AdjudicationError::Triggered { attempt }.to_string());
        }
        self.adjudicate(&task.shard, confidence).await
    }

    /// Call the adjudicator and fold every way it can fail into an `Outcome`.
    ///
    /// The call runs on its own task so a panic is contained. It is awaited
    /// immediately; only one adjudication is ever in flight.
    async fn adjudicate(&self, shard: &Shard, confidence: Confidence) -> Outcome {
        let adjudicator = Arc::clone(&self.adjudicator);
        let shard = shard.clone();
        let handle =
            tokio::spawn(async move { adjudicator.adjudicate(&shard, confidence).await });

        let result = match handle.await {
            Ok(result) => result,
            Err(join_err) if join_err.is_panic() => Err(AdjudicationError::Panicked(
                panic_message(join_err.into_panic()),
            )),
            Err(join_err) => Err(AdjudicationError::Unavailable(join_err.to_string())),
        };

        match result {
            Ok(verdict) => Outcome::passed(verdict),
            Err(err) => Outcome::failed(err.to_string()),
        }
    }

    async fn record_attempt(
        &self,
        run: &mut RunState,
        task: &TaskRecord,
        phase: Phase,
        confidence: Confidence,
        outcome: &Outcome,
    ) {
        run.summary.total_attempts += 1;
        tracing::debug!(
            index = %task.index(),
            attempt = task.attempts,
            ?phase,
            %confidence,
            "{outcome}"
        );
        let event = AttemptEvent {
            run_id: run.run_id,
            attempt_id: self.ids.generate_attempt_id(),
            index: task.index(),
            attempt: task.attempts,
            phase,
            confidence,
            outcome: outcome.clone(),
            at: self.now(),
        };
        self.emit(SchedulerEvent::Attempt(event)).await;
    }

    async fn emit(&self, event: SchedulerEvent) {
        if let Err(err) = self.sink.emit(&event).await {
            tracing::warn!(error = %err, "event sink failed, continuing");
        }
    }

    async fn pace(&self) {
        let pacing = self.config.pacing();
        if !pacing.is_zero() {
            tokio::time::sleep(pacing).await;
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
