//! Ports: the seams where collaborators are injected.
//!
//! The scheduler only talks to these traits. Reference implementations live
//! in `impls`; production callers bring their own.

pub mod adjudicator;
pub mod clock;
pub mod event_sink;
pub mod failure_trigger;
pub mod id_generator;
pub mod shard_source;

pub use self::adjudicator::Adjudicator;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::failure_trigger::FailureTrigger;
pub use self::id_generator::{IdGenerator, SequentialIds, UlidGenerator};
pub use self::shard_source::ShardSource;
