//! docket-core
//!
//! In-process two-phase retry scheduler for ordered shards of text.
//!
//! # Modules
//! - **domain**: ids, shards, verdicts, decisions, events, errors
//! - **ports**: Adjudicator, FailureTrigger, ShardSource, EventSink, Clock, IdGenerator
//! - **queue**: task state machine, task records, primary and deferred queues
//! - **app**: SchedulerBuilder, RetryScheduler, RunReport
//! - **impls**: reference ports (threshold adjudicator, splitters, sinks, triggers)
//! - **config**: RunConfig

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod queue;

pub use app::{RetryScheduler, RunReport, SchedulerBuilder};
pub use config::RunConfig;
