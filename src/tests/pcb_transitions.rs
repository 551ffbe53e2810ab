use crate::pcb::{Pcb, Pid, Priority, ProcessState};

fn pcb() -> Pcb {
    Pcb::new(Pid(0), "prg.exe", Priority::new(2).unwrap(), 3)
}

#[test]
fn new_pcb_starts_in_new_state_with_absent_pages() {
    let p = pcb();
    assert_eq!(p.state(), ProcessState::New);
    assert!(p.page_table().iter().all(Option::is_none));
    assert_eq!(p.pc, 0);
}

#[test]
fn transitions_set_the_expected_state() {
    let mut p = pcb();
    p.to_ready();
    assert_eq!(p.state(), ProcessState::Ready);
    p.to_running();
    assert_eq!(p.state(), ProcessState::Running);
    p.to_waiting();
    assert_eq!(p.state(), ProcessState::Waiting);
    p.to_terminated();
    assert_eq!(p.state(), ProcessState::Terminated);
}

#[test]
fn priority_rejects_out_of_range_values() {
    assert!(Priority::new(4).is_ok());
    assert!(Priority::new(5).is_err());
}

#[test]
fn resident_pages_tracks_set_and_clear() {
    use crate::pcb::{FrameId, PageId};

    let mut p = pcb();
    p.set_resident(PageId(0), FrameId(7));
    p.set_resident(PageId(2), FrameId(1));
    assert_eq!(p.resident_pages().collect::<Vec<_>>(), vec![(PageId(0), FrameId(7)), (PageId(2), FrameId(1))]);

    p.clear_resident(PageId(0));
    assert_eq!(p.resident_pages().collect::<Vec<_>>(), vec![(PageId(2), FrameId(1))]);
    assert_eq!(p.resident_frames(), vec![FrameId(1)]);
}
