//! Mechanizes context transfer between a PCB and the CPU/MMU. Never
//! decides which PCB runs next; that's the scheduler's job.

use crate::hardware::Hardware;
use crate::pcb::Pcb;

#[derive(Debug, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Installs `pcb` onto the CPU and MMU exclusively: sets the PC,
    /// resets the TLB, then re-installs every resident page.
    pub fn load<H: Hardware>(&self, pcb: &Pcb, hardware: &mut H) {
        hardware.set_pc(pcb.pc);
        hardware.reset_tlb();
        for (page, frame) in pcb.resident_pages() {
            hardware.set_page_frame(page, frame);
        }
    }

    /// Saves the CPU's PC back into `pcb` and idles the CPU.
    pub fn save<H: Hardware>(&self, pcb: &mut Pcb, hardware: &mut H) {
        pcb.pc = hardware.pc();
        hardware.set_pc(-1);
    }
}
