//! Kernel configuration.
//!
//! There is no CLI and no environment-variable surface: a caller builds
//! a [`KernelConfig`] programmatically (or deserializes one for a test
//! fixture) and passes it to [`crate::Kernel::new`].

use serde::{Deserialize, Serialize};

/// When the Gantt recorder flushes its accumulated rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopCondition {
    /// Flush once `clock.current_tick() == tick`.
    AtTick(u64),
    /// Never flush automatically; caller renders on demand.
    Never,
}

impl Default for StopCondition {
    fn default() -> Self {
        StopCondition::Never
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Total simulated memory, in the same units as `frame_size`.
    pub memory_size: usize,
    /// Size of a frame/page, in memory units.
    pub frame_size: usize,
    /// Quantum for round-robin scheduling; ignored by other policies.
    pub round_robin_quantum: Option<u32>,
    pub gantt_stop: StopCondition,
}

impl KernelConfig {
    pub fn new(memory_size: usize, frame_size: usize) -> Self {
        Self {
            memory_size,
            frame_size,
            round_robin_quantum: None,
            gantt_stop: StopCondition::Never,
        }
    }

    pub fn with_round_robin_quantum(mut self, quantum: u32) -> Self {
        self.round_robin_quantum = Some(quantum);
        self
    }

    pub fn with_gantt_stop(mut self, stop: StopCondition) -> Self {
        self.gantt_stop = stop;
        self
    }

    pub fn total_frames(&self) -> usize {
        self.memory_size / self.frame_size
    }
}
