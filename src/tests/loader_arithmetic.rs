use osim_hardware_sim::HardwareSim;

use crate::fs::FileSystem;
use crate::loader::Loader;
use crate::pcb::{FrameId, PageId};
use crate::program::{cpu_burst, Instruction, Program};

#[test]
fn page_count_rounds_up_to_the_next_whole_page() {
    let loader = Loader::new(4);
    let mut fs = FileSystem::new();
    // 9 instructions (incl. the appended EXIT) at 4 per page needs 3 pages.
    fs.write("p.exe", Program::new("p.exe", cpu_burst(8)));
    assert_eq!(loader.page_count(&fs, "p.exe").unwrap(), 3);
}

#[test]
fn page_count_reports_missing_programs() {
    let loader = Loader::new(4);
    let fs = FileSystem::new();
    assert!(loader.page_count(&fs, "missing.exe").is_err());
}

#[test]
fn load_page_writes_only_the_requested_pages_instructions_at_the_frames_offsets() {
    let loader = Loader::new(4);
    let mut fs = FileSystem::new();
    fs.write("p.exe", Program::new("p.exe", cpu_burst(8)));
    let mut hardware = HardwareSim::new(16, 4, 0, 1);

    loader
        .load_page(&fs, &mut hardware, "p.exe", PageId(1), FrameId(2))
        .unwrap();

    // Page 1 covers instructions [4..8), all Cpu, landing at frame 2's offsets [8..12).
    for offset in 0..4 {
        assert_eq!(hardware.peek(2 * 4 + offset), Some(Instruction::Cpu));
    }
    // Page 0 was never loaded, so frame 0 stays untouched.
    assert_eq!(hardware.peek(0), None);
}
