//! Reference implementations of the ports.
//!
//! Enough to drive a run from the CLI and from tests. Real adjudicators and
//! shard sources live with the caller.

pub mod sinks;
pub mod splitters;
pub mod threshold;
pub mod triggers;

pub use self::sinks::{JsonLinesSink, MemorySink, NoopSink, TracingSink};
pub use self::splitters::{ChunkSplitter, LineSplitter, ParagraphSplitter};
pub use self::threshold::ThresholdAdjudicator;
pub use self::triggers::{DEFAULT_MARKER, MarkerTrigger, NeverTrigger};
