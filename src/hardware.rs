//! The hardware contract the kernel consumes.
//!
//! These traits describe the simulated hardware environment the kernel
//! runs against. The kernel never implements them itself; a concrete
//! implementation (e.g. `osim-hardware-sim`) is supplied by the caller.
//! Every kernel entry point takes `&mut impl Hardware` as an explicit
//! argument rather than reaching for a process-wide singleton.

use crate::pcb::FrameId;
use crate::pcb::PageId;
use crate::program::Instruction;

/// Physical memory: a flat array of instruction cells.
pub trait MemoryBus {
    fn write_memory(&mut self, address: usize, instruction: Instruction);
    fn memory_size(&self) -> usize;
}

/// The CPU's program counter. `-1` is the idle sentinel.
pub trait CpuState {
    fn pc(&self) -> i64;
    fn set_pc(&mut self, pc: i64);
}

/// The MMU: per-process TLB plus a system-wide, frame-ordered LRU
/// access history used for victim selection on eviction.
pub trait MmuState {
    fn frame_size(&self) -> usize;
    fn set_page_frame(&mut self, page: PageId, frame: FrameId);
    fn reset_tlb(&mut self);
    /// Pops the least-recently-used resident frame (oldest-first, ties
    /// broken by earliest recorded use), or `None` if nothing is resident.
    fn pop_lru_frame(&mut self) -> Option<FrameId>;
}

/// The round-robin timer. A no-op for every other scheduling policy.
pub trait TimerState {
    fn quantum(&self) -> u32;
    fn set_quantum(&mut self, quantum: u32);
    fn reset(&mut self);
}

/// The single I/O device.
pub trait IoDeviceState {
    fn execute(&mut self, instruction: Instruction);
    fn is_idle(&self) -> bool;
}

/// The simulated wall clock driving the hardware's tick loop.
pub trait ClockState {
    fn current_tick(&self) -> u64;
}

/// Convenience bundle so kernel APIs take one type parameter.
pub trait Hardware: MemoryBus + CpuState + MmuState + TimerState + IoDeviceState + ClockState {}

impl<T> Hardware for T where T: MemoryBus + CpuState + MmuState + TimerState + IoDeviceState + ClockState {}
