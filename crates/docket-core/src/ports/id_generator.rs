//! IdGenerator port.
//!
//! Run and attempt ids are ULIDs whose timestamp part comes from a `Clock`,
//! so a `FixedClock` pins the time component while the random part still
//! keeps ids unique. `SequentialIds` drops the randomness for tests that
//! compare whole event streams.

use std::sync::atomic::{AtomicU64, Ordering};

use ulid::Ulid;

use crate::domain::{AttemptId, RunId};
use crate::ports::Clock;

pub trait IdGenerator: Send + Sync {
    fn generate_run_id(&self) -> RunId;

    fn generate_attempt_id(&self) -> AttemptId;
}

/// ULID generator stamped by a clock.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn next(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_run_id(&self) -> RunId {
        RunId::from(self.next())
    }

    fn generate_attempt_id(&self) -> AttemptId {
        AttemptId::from(self.next())
    }
}

/// Deterministic ids: a counter in the random part, zero timestamp.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> Ulid {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Ulid::from_parts(0, u128::from(n))
    }
}

impl IdGenerator for SequentialIds {
    fn generate_run_id(&self) -> RunId {
        RunId::from(self.next())
    }

    fn generate_attempt_id(&self) -> AttemptId {
        AttemptId::from(self.next())
    }
}
