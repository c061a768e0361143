//! SchedulerBuilder - wiring and start-up validation.
//!
//! # Usage
//! ```ignore
//! let scheduler = SchedulerBuilder::new()
//!     .config(RunConfig::load("docket.json")?)
//!     .adjudicator(MyAdjudicator::new())
//!     .trigger(MarkerTrigger::default())
//!     .sink(Arc::new(TracingSink))
//!     .build()?;
//! ```
//!
//! # Fail-fast
//! `build()` refuses to produce a scheduler without an adjudicator or with
//! an invalid config, so a run itself never has to.

use std::sync::Arc;

use super::scheduler::RetryScheduler;
use crate::config::RunConfig;
use crate::domain::{BuildError, DefaultDecider};
use crate::impls::{NeverTrigger, NoopSink};
use crate::ports::{
    Adjudicator, Clock, EventSink, FailureTrigger, IdGenerator, SystemClock, UlidGenerator,
};

pub struct SchedulerBuilder {
    config: RunConfig,
    adjudicator: Option<Arc<dyn Adjudicator>>,
    trigger: Arc<dyn FailureTrigger>,
    sink: Arc<dyn EventSink>,
    clock: Arc<dyn Clock>,
    ids: Option<Arc<dyn IdGenerator>>,
}

impl SchedulerBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
            adjudicator: None,
            trigger: Arc::new(NeverTrigger),
            sink: Arc::new(NoopSink),
            clock: Arc::new(SystemClock),
            ids: None,
        }
    }

    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Required.
    pub fn adjudicator<A: Adjudicator + 'static>(mut self, adjudicator: A) -> Self {
        self.adjudicator = Some(Arc::new(adjudicator));
        self
    }

    pub fn trigger<T: FailureTrigger + 'static>(mut self, trigger: T) -> Self {
        self.trigger = Arc::new(trigger);
        self
    }

    /// Shared so the caller can keep a handle (e.g. to read a `MemorySink`).
    pub fn sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Defaults to ULIDs stamped by the system clock.
    pub fn id_generator<G: IdGenerator + 'static>(mut self, ids: G) -> Self {
        self.ids = Some(Arc::new(ids));
        self
    }

    pub fn build(self) -> Result<RetryScheduler, BuildError> {
        self.config.validate()?;
        let adjudicator = self.adjudicator.ok_or(BuildError::MissingAdjudicator)?;
        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(SystemClock)));

        Ok(RetryScheduler {
            decider: DefaultDecider::new(self.config.max_attempts),
            config: self.config,
            adjudicator,
            trigger: self.trigger,
            sink: self.sink,
            clock: self.clock,
            ids,
        })
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
