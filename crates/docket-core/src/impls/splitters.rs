//! Reference shard sources.

use crate::ports::ShardSource;

/// One shard per non-blank line, trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSplitter;

impl ShardSource for LineSplitter {
    fn split(&self, raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// One shard per block of text separated by blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphSplitter;

impl ShardSource for ParagraphSplitter {
    fn split(&self, raw: &str) -> Vec<String> {
        let mut shards = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in raw.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    shards.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line.trim_end());
            }
        }
        if !current.is_empty() {
            shards.push(current.join("\n"));
        }
        shards
    }
}

/// Fixed-size chunks of at most `max_chars` characters.
///
/// Counts `char`s, never splits inside a code point.
#[derive(Debug, Clone, Copy)]
pub struct ChunkSplitter {
    max_chars: usize,
}

impl ChunkSplitter {
    /// `max_chars` of zero is treated as one.
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }
}

impl ShardSource for ChunkSplitter {
    fn split(&self, raw: &str) -> Vec<String> {
        let chars: Vec<char> = raw.chars().collect();
        chars
            .chunks(self.max_chars)
            .map(|c| c.iter().collect())
            .collect()
    }
}
