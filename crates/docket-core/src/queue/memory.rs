//! In-memory run queues.
//!
//! Both queues hold whole `TaskRecord`s and are owned by a single run, so
//! there is no locking. The two types expose different operations on
//! purpose: only the primary queue can take a task at the front.

use std::collections::VecDeque;

use super::TaskRecord;
use crate::domain::Shard;

/// Primary work queue.
///
/// Initially index-ascending. A retried task is pushed to the front so it is
/// served before any shard that has not had its first attempt.
#[derive(Debug, Default)]
pub struct PrimaryQueue {
    tasks: VecDeque<TaskRecord>,
}

impl PrimaryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the queue for a run: one pending task per shard, in order.
    pub fn from_shards(shards: impl IntoIterator<Item = Shard>) -> Self {
        let mut queue = Self::new();
        for shard in shards {
            queue.push_back(TaskRecord::new(shard));
        }
        queue
    }

    /// Initial population.
    pub fn push_back(&mut self, task: TaskRecord) {
        self.tasks.push_back(task);
    }

    /// Priority retry.
    pub fn push_front(&mut self, task: TaskRecord) {
        debug_assert!(task.state.is_primary_runnable());
        self.tasks.push_front(task);
    }

    pub fn pop_front(&mut self) -> Option<TaskRecord> {
        self.tasks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Deferred queue: strictly FIFO, fed only by the primary failure path.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    tasks: VecDeque<TaskRecord>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, task: TaskRecord) {
        debug_assert_eq!(task.state, super::TaskState::Deferred);
        self.tasks.push_back(task);
    }

    pub fn pop_front(&mut self) -> Option<TaskRecord> {
        self.tasks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShardIndex;

    fn shards(n: usize) -> Vec<Shard> {
        (0..n)
            .map(|i| Shard::new(ShardIndex::new(i), format!("s{i}")))
            .collect()
    }

    #[test]
    fn primary_is_index_ascending() {
        let mut q = PrimaryQueue::from_shards(shards(3));
        let order: Vec<usize> = std::iter::from_fn(|| q.pop_front())
            .map(|t| t.index().get())
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn retried_task_jumps_ahead_of_untouched_shards() {
        let mut q = PrimaryQueue::from_shards(shards(3));
        let mut first = q.pop_front().unwrap();
        first.start_attempt();
        first.schedule_retry("boom".into());
        q.push_front(first);

        let next = q.pop_front().unwrap();
        assert_eq!(next.index().get(), 0);
        assert_eq!(next.attempts, 2);
        assert_eq!(q.pop_front().unwrap().index().get(), 1);
    }

    #[test]
    fn deferred_is_fifo() {
        let mut q = DeferredQueue::new();
        for shard in shards(3).into_iter().rev() {
            let mut t = TaskRecord::new(shard);
            t.start_attempt();
            t.defer("x".into());
            q.push_back(t);
        }
        assert_eq!(q.len(), 3);

        let order: Vec<usize> = std::iter::from_fn(|| q.pop_front())
            .map(|t| t.index().get())
            .collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queues() {
        assert!(PrimaryQueue::from_shards(Vec::new()).is_empty());
        let q = DeferredQueue::new();
        assert_eq!(q.len(), 0);
    }
}
