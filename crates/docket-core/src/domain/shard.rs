use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Zero-based position of a shard in the sequence a run was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShardIndex(usize);

impl ShardIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One unit of content produced by a `ShardSource`.
///
/// The content is shared (`Arc<str>`) because a shard is handed to the
/// adjudicator on every attempt; it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    index: ShardIndex,
    content: Arc<str>,
}

impl Shard {
    pub fn new(index: ShardIndex, content: impl Into<Arc<str>>) -> Self {
        Self {
            index,
            content: content.into(),
        }
    }

    pub fn index(&self) -> ShardIndex {
        self.index
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
