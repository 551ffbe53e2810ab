//! Ordered registry of PCBs keyed by pid, plus the single running-pcb slot.

use crate::pcb::{FrameId, PageId, Pcb, Pid, ProcessState};

#[derive(Debug, Default)]
pub struct PcbTable {
    table: Vec<Pcb>,
    next_pid: u64,
    running: Option<Pid>,
}

impl PcbTable {
    pub fn new() -> Self {
        PcbTable::default()
    }

    /// Monotonically increasing, never reused.
    pub fn new_pid(&mut self) -> Pid {
        let pid = Pid(self.next_pid);
        self.next_pid += 1;
        pid
    }

    pub fn add(&mut self, pcb: Pcb) {
        self.table.push(pcb);
    }

    pub fn get(&self, pid: Pid) -> Option<&Pcb> {
        self.table.iter().find(|p| p.pid() == pid)
    }

    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut Pcb> {
        self.table.iter_mut().find(|p| p.pid() == pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pcb> {
        self.table.iter()
    }

    pub fn running(&self) -> Option<Pid> {
        self.running
    }

    pub fn running_pcb(&self) -> Option<&Pcb> {
        self.running.and_then(|pid| self.get(pid))
    }

    pub fn set_running(&mut self, pid: Option<Pid>) {
        self.running = pid;
    }

    /// True while at least one PCB has not reached [`ProcessState::Terminated`].
    pub fn has_live_processes(&self) -> bool {
        self.table
            .iter()
            .any(|p| p.state() != ProcessState::Terminated)
    }

    /// Finds the owning PCB and logical page currently mapped to `frame`,
    /// if any. Used by the page-fault handler to clear a victim's
    /// page-table entry back to absent.
    pub fn find_frame_owner(&self, frame: FrameId) -> Option<(Pid, PageId)> {
        for pcb in &self.table {
            for (page, resident_frame) in pcb.resident_pages() {
                if resident_frame == frame {
                    return Some((pcb.pid(), page));
                }
            }
        }
        None
    }
}
