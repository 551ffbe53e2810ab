//! Scheduling policies.
//!
//! Modeled as one tagged enum rather than an inheritance hierarchy.
//! Admission is split into a pure decision ([`AdmissionDecision`],
//! computed here) and the actual PCB transition plus dispatcher call,
//! which the interrupt handlers perform, keeping every PCB state
//! transition inside a handler rather than inside the scheduler
//! itself.

mod priority_buckets;

use std::collections::VecDeque;

pub use priority_buckets::PriorityBuckets;

use crate::pcb::{Pid, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// No PCB is running; load this one immediately.
    Run,
    /// A PCB is running and keeps the CPU; enqueue this one.
    Enqueue,
    /// A PCB is running but must be preempted in favor of this one.
    Preempt,
}

#[derive(Debug)]
pub enum Scheduler {
    Fcfs(VecDeque<Pid>),
    PriorityNonPreemptive(PriorityBuckets),
    PriorityPreemptive(PriorityBuckets),
    RoundRobin(VecDeque<Pid>),
}

impl Scheduler {
    pub fn fcfs() -> Self {
        Scheduler::Fcfs(VecDeque::new())
    }

    pub fn priority_non_preemptive() -> Self {
        Scheduler::PriorityNonPreemptive(PriorityBuckets::new())
    }

    pub fn priority_preemptive() -> Self {
        Scheduler::PriorityPreemptive(PriorityBuckets::new())
    }

    pub fn round_robin() -> Self {
        Scheduler::RoundRobin(VecDeque::new())
    }

    pub fn is_round_robin(&self) -> bool {
        matches!(self, Scheduler::RoundRobin(_))
    }

    /// Pure admission decision: does NOT touch PCB state or the ready
    /// queue. `running_priority` is `None` iff the CPU is idle.
    pub fn decide_admission(&self, running_priority: Option<Priority>, candidate: Priority) -> AdmissionDecision {
        match (self, running_priority) {
            (_, None) => AdmissionDecision::Run,
            (Scheduler::PriorityPreemptive(_), Some(running)) if candidate < running => AdmissionDecision::Preempt,
            (_, Some(_)) => AdmissionDecision::Enqueue,
        }
    }

    pub fn add(&mut self, pid: Pid, priority: Priority) {
        match self {
            Scheduler::Fcfs(queue) | Scheduler::RoundRobin(queue) => queue.push_back(pid),
            Scheduler::PriorityNonPreemptive(buckets) | Scheduler::PriorityPreemptive(buckets) => {
                buckets.add(pid, priority)
            }
        }
    }

    pub fn get_next(&mut self) -> Option<Pid> {
        match self {
            Scheduler::Fcfs(queue) | Scheduler::RoundRobin(queue) => queue.pop_front(),
            Scheduler::PriorityNonPreemptive(buckets) | Scheduler::PriorityPreemptive(buckets) => {
                buckets.get_next()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Scheduler::Fcfs(queue) | Scheduler::RoundRobin(queue) => queue.is_empty(),
            Scheduler::PriorityNonPreemptive(buckets) | Scheduler::PriorityPreemptive(buckets) => {
                buckets.is_empty()
            }
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Scheduler::Fcfs(queue) | Scheduler::RoundRobin(queue) => queue.len(),
            Scheduler::PriorityNonPreemptive(buckets) | Scheduler::PriorityPreemptive(buckets) => {
                buckets.size()
            }
        }
    }
}
