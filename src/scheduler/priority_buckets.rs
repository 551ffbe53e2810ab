//! Five priority FIFOs plus the aging rule, shared between the
//! non-preemptive and preemptive priority schedulers, which differ only
//! in their admission decision.

use std::collections::VecDeque;

use crate::pcb::{Pid, Priority};

const BUCKET_COUNT: usize = (Priority::MAX as usize) + 1;

#[derive(Debug, Default)]
pub struct PriorityBuckets {
    buckets: [VecDeque<Pid>; BUCKET_COUNT],
}

impl PriorityBuckets {
    pub fn new() -> Self {
        PriorityBuckets::default()
    }

    /// Appends to the bucket matching `priority`. Out-of-range priorities
    /// can't reach here through the public API (`Priority` is validated
    /// at construction); this stays a defensive no-op rather than
    /// indexing out of bounds.
    pub fn add(&mut self, pid: Pid, priority: Priority) {
        let index = priority.get() as usize;
        match self.buckets.get_mut(index) {
            Some(bucket) => bucket.push_back(pid),
            None => tracing::warn!(priority = index, "dropped pcb with out-of-range priority"),
        }
    }

    /// Pops the head of the first non-empty bucket (0 = highest
    /// priority), then ages every PCB in buckets 1..=4 up one level,
    /// preserving per-bucket FIFO order. Aging runs exactly once, only
    /// when a PCB was actually returned.
    pub fn get_next(&mut self) -> Option<Pid> {
        for bucket in &mut self.buckets {
            if let Some(pid) = bucket.pop_front() {
                self.apply_aging();
                return Some(pid);
            }
        }
        None
    }

    fn apply_aging(&mut self) {
        for priority in 1..BUCKET_COUNT {
            while let Some(pid) = self.buckets[priority].pop_front() {
                self.buckets[priority - 1].push_back(pid);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(VecDeque::is_empty)
    }

    pub fn size(&self) -> usize {
        self.buckets.iter().map(VecDeque::len).sum()
    }

    /// Priorities (bucket indices) currently holding at least one PCB,
    /// lowest-index (highest-priority) first. Exposed for tests that
    /// assert aging monotonicity.
    #[cfg(test)]
    pub fn occupied_buckets(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_empty())
            .map(|(i, _)| i)
            .collect()
    }
}
