//! Strongly-typed identifiers.
//!
//! Every id is a ULID wrapped in `Id<T>`, where `T` is a zero-sized marker
//! that only exists at compile time. A `RunId` and an `AttemptId` share one
//! implementation but cannot be mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait for id kinds. Supplies the display prefix.
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// ULID-backed identifier tagged with a marker type.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Run {}

impl IdMarker for Run {
    fn prefix() -> &'static str {
        "run-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attempt {}

impl IdMarker for Attempt {
    fn prefix() -> &'static str {
        "attempt-"
    }
}

/// Identifier of one scheduling run.
pub type RunId = Id<Run>;

/// Identifier of a single adjudication attempt.
pub type AttemptId = Id<Attempt>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_kind_prefix() {
        let ulid = Ulid::new();
        let run = RunId::from_ulid(ulid);
        let attempt = AttemptId::from_ulid(ulid);

        assert_eq!(run.to_string(), format!("run-{ulid}"));
        assert_eq!(attempt.to_string(), format!("attempt-{ulid}"));
        // let _: RunId = attempt; // <- does not compile
    }

    #[test]
    fn serializes_as_bare_ulid() {
        let ulid = Ulid::new();
        let run = RunId::from_ulid(ulid);

        let s = serde_json::to_string(&run).unwrap();
        assert_eq!(s, format!("\"{ulid}\""));

        let back: RunId = serde_json::from_str(&s).unwrap();
        assert_eq!(back, run);
    }

    #[test]
    fn marker_costs_nothing() {
        assert_eq!(std::mem::size_of::<RunId>(), std::mem::size_of::<Ulid>());
    }
}
