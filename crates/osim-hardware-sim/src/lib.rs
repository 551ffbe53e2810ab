//! A deterministic fake of the hardware trait bundle `osim` runs
//! against: a flat memory array, a CPU program counter, an MMU with
//! LRU-ordered frame tracking, a round-robin timer, a single I/O
//! device, and a tick counter.
//!
//! Nothing here is meant to model real timing. Ticks advance one unit
//! at a time; the I/O device "completes" after a fixed number of ticks
//! configured at construction.

use std::collections::VecDeque;

use osim::{FrameId, Instruction, Kernel, PageId};
use tracing::debug;

/// One simulated machine tick: advance the clock, let the CPU retire
/// one instruction (possibly raising an interrupt), let the I/O device
/// advance, and sample the Gantt recorder.
#[derive(Debug)]
pub struct HardwareSim {
    memory: Vec<Option<Instruction>>,
    frame_size: usize,
    pc: i64,
    tlb: Vec<Option<FrameId>>,
    lru: VecDeque<FrameId>,
    quantum: u32,
    quantum_remaining: u32,
    io_busy_ticks: u32,
    io_remaining: u32,
    tick: u64,
}

impl HardwareSim {
    pub fn new(memory_size: usize, frame_size: usize, round_robin_quantum: u32, io_busy_ticks: u32) -> Self {
        HardwareSim {
            memory: vec![None; memory_size],
            frame_size,
            pc: -1,
            tlb: Vec::new(),
            lru: VecDeque::new(),
            quantum: round_robin_quantum,
            quantum_remaining: round_robin_quantum,
            io_busy_ticks,
            io_remaining: 0,
            tick: 0,
        }
    }

    fn fetch(&self) -> Option<Instruction> {
        if self.pc < 0 {
            return None;
        }
        let page = PageId(self.pc as usize / self.frame_size);
        let frame = *self.tlb.get(page.0)?;
        let frame = frame?;
        let address = frame.0 * self.frame_size + (self.pc as usize % self.frame_size);
        self.memory.get(address).copied().flatten()
    }

    /// Runs the machine for one tick against `kernel`, returning once
    /// the tick's interrupt (if any) has been fully handled. Driving
    /// code calls this in a loop until `kernel.has_live_processes()` is
    /// false.
    pub fn step(&mut self, kernel: &mut Kernel) {
        self.tick += 1;

        if self.io_remaining > 0 {
            self.io_remaining -= 1;
            if self.io_remaining == 0 {
                let _ = kernel.handle(self, osim::Irq::IoOut);
            }
        }

        if self.pc >= 0 {
            match self.fetch() {
                Some(Instruction::Cpu) => {
                    self.pc += 1;
                    self.quantum_remaining = self.quantum_remaining.saturating_sub(1);
                    if self.quantum > 0 && self.quantum_remaining == 0 {
                        let _ = kernel.handle(self, osim::Irq::Timeout);
                    }
                }
                Some(Instruction::Io) => {
                    self.pc += 1;
                    let _ = kernel.handle(self, osim::Irq::IoIn { instruction: Instruction::Io });
                }
                Some(Instruction::Exit) => {
                    let _ = kernel.handle(self, osim::Irq::Kill);
                }
                None => {
                    let page = PageId(self.pc as usize / self.frame_size);
                    let _ = kernel.handle(self, osim::Irq::PageFault { page });
                }
            }
        }

        let _ = kernel.handle(self, osim::Irq::Stat);
        debug!(tick = self.tick, pc = self.pc, "tick complete");
    }

    /// Runs `step` until the kernel reports no live processes.
    pub fn run_to_completion(&mut self, kernel: &mut Kernel) {
        while kernel.has_live_processes() {
            self.step(kernel);
        }
    }

    /// Reads a raw memory cell by physical address, bypassing the TLB.
    /// Exposed for tests asserting where the loader placed instructions.
    pub fn peek(&self, address: usize) -> Option<Instruction> {
        self.memory.get(address).copied().flatten()
    }

    /// Forces the I/O device idle without waiting out `io_busy_ticks`.
    /// For tests driving the I/O controller directly, without a full
    /// tick loop.
    pub fn finish_current_io(&mut self) {
        self.io_remaining = 0;
    }
}

impl osim::hardware::MemoryBus for HardwareSim {
    fn write_memory(&mut self, address: usize, instruction: Instruction) {
        self.memory[address] = Some(instruction);
    }

    fn memory_size(&self) -> usize {
        self.memory.len()
    }
}

impl osim::hardware::CpuState for HardwareSim {
    fn pc(&self) -> i64 {
        self.pc
    }

    fn set_pc(&mut self, pc: i64) {
        self.pc = pc;
    }
}

impl osim::hardware::MmuState for HardwareSim {
    fn frame_size(&self) -> usize {
        self.frame_size
    }

    fn set_page_frame(&mut self, page: PageId, frame: FrameId) {
        if self.tlb.len() <= page.0 {
            self.tlb.resize(page.0 + 1, None);
        }
        self.tlb[page.0] = Some(frame);
        self.lru.retain(|f| *f != frame);
        self.lru.push_back(frame);
    }

    fn reset_tlb(&mut self) {
        self.tlb.clear();
    }

    fn pop_lru_frame(&mut self) -> Option<FrameId> {
        self.lru.pop_front()
    }
}

impl osim::hardware::TimerState for HardwareSim {
    fn quantum(&self) -> u32 {
        self.quantum
    }

    fn set_quantum(&mut self, quantum: u32) {
        self.quantum = quantum;
        self.quantum_remaining = quantum;
    }

    fn reset(&mut self) {
        self.quantum_remaining = self.quantum;
    }
}

impl osim::hardware::IoDeviceState for HardwareSim {
    fn execute(&mut self, _instruction: Instruction) {
        self.io_remaining = self.io_busy_ticks.max(1);
    }

    fn is_idle(&self) -> bool {
        self.io_remaining == 0
    }
}

impl osim::hardware::ClockState for HardwareSim {
    fn current_tick(&self) -> u64 {
        self.tick
    }
}
