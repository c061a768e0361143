//! Queue module: task state machine, task records and the two run queues.

mod memory;
mod record;
mod state;

pub use memory::{DeferredQueue, PrimaryQueue};
pub use record::TaskRecord;
pub use state::TaskState;
