//! The Process Control Block and the small value types around it.

use crate::error::KernelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

/// A validated process priority in `0..=4`. Priority 0 is highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 4;

    pub fn new(value: u8) -> Result<Self, KernelError> {
        if value <= Self::MAX {
            Ok(Priority(value))
        } else {
            Err(KernelError::InvalidPriority(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Closed state machine. Transitions are centralized on [`Pcb`] rather
/// than assigned ad hoc so tests can assert the full set of legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    New,
    Ready,
    Running,
    Waiting,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct Pcb {
    pid: Pid,
    path: String,
    priority: Priority,
    /// Saved program counter while not loaded onto the CPU.
    pub pc: i64,
    state: ProcessState,
    /// One entry per logical page of the program; `None` means "not yet
    /// resident" (pure demand paging: every entry starts absent).
    page_table: Vec<Option<FrameId>>,
}

impl Pcb {
    pub fn new(pid: Pid, path: impl Into<String>, priority: Priority, page_count: usize) -> Self {
        Pcb {
            pid,
            path: path.into(),
            priority,
            pc: 0,
            state: ProcessState::New,
            page_table: vec![None; page_count],
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn page_table(&self) -> &[Option<FrameId>] {
        &self.page_table
    }

    /// Resident `(page, frame)` pairs, in page order, for the dispatcher
    /// to install into the MMU's TLB.
    pub fn resident_pages(&self) -> impl Iterator<Item = (PageId, FrameId)> + '_ {
        self.page_table
            .iter()
            .enumerate()
            .filter_map(|(page, frame)| frame.map(|f| (PageId(page), f)))
    }

    pub fn set_resident(&mut self, page: PageId, frame: FrameId) {
        self.page_table[page.0] = Some(frame);
    }

    pub fn clear_resident(&mut self, page: PageId) {
        self.page_table[page.0] = None;
    }

    /// All currently resident frames, e.g. to free on termination.
    pub fn resident_frames(&self) -> Vec<FrameId> {
        self.page_table.iter().filter_map(|f| *f).collect()
    }

    pub fn to_ready(&mut self) {
        self.state = ProcessState::Ready;
    }

    pub fn to_running(&mut self) {
        self.state = ProcessState::Running;
    }

    pub fn to_waiting(&mut self) {
        self.state = ProcessState::Waiting;
    }

    pub fn to_terminated(&mut self) {
        self.state = ProcessState::Terminated;
    }
}
