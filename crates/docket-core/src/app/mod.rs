//! App layer: puts the ports, queues and decider together.
//!
//! - **SchedulerBuilder**: wiring and start-up validation
//! - **RetryScheduler**: the two-phase run loop
//! - **RunReport**: per-shard resolutions and aggregate counts

pub mod builder;
pub mod report;
pub mod scheduler;

pub use self::builder::SchedulerBuilder;
pub use self::report::{Resolution, RunReport, TaskResolution};
pub use self::scheduler::RetryScheduler;
