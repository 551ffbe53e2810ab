//! Serializes I/O requests onto the single simulated device, strict FIFO.

use std::collections::VecDeque;

use crate::hardware::Hardware;
use crate::pcb::Pid;
use crate::program::Instruction;

#[derive(Debug, Default)]
pub struct IoDeviceController {
    waiting_queue: VecDeque<(Pid, Instruction)>,
    current: Option<Pid>,
}

impl IoDeviceController {
    pub fn new() -> Self {
        IoDeviceController::default()
    }

    /// Enqueues `(pid, instruction)` and starts it immediately if the
    /// device is idle and nothing else is ahead of it.
    pub fn run_operation<H: Hardware>(&mut self, hardware: &mut H, pid: Pid, instruction: Instruction) {
        self.waiting_queue.push_back((pid, instruction));
        self.start_next_if_idle(hardware);
    }

    /// Clears the finished slot and immediately starts the next queued
    /// operation, if any and the device is idle.
    pub fn finished_pcb<H: Hardware>(&mut self, hardware: &mut H) -> Option<Pid> {
        let finished = self.current.take();
        self.start_next_if_idle(hardware);
        finished
    }

    fn start_next_if_idle<H: Hardware>(&mut self, hardware: &mut H) {
        if self.current.is_none() && hardware.is_idle() {
            if let Some((pid, instruction)) = self.waiting_queue.pop_front() {
                self.current = Some(pid);
                hardware.execute(instruction);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.waiting_queue.is_empty() && self.current.is_none()
    }
}
