//! The kernel: owns every component and routes interrupts to their handlers.

use std::collections::HashMap;

use crate::config::KernelConfig;
use crate::dispatcher::Dispatcher;
use crate::error::KernelError;
use crate::fs::FileSystem;
use crate::gantt::GanttRecorder;
use crate::hardware::Hardware;
use crate::interrupts::{self, Irq};
use crate::io::IoDeviceController;
use crate::loader::Loader;
use crate::memory::MemoryManager;
use crate::pcb::{FrameId, PageId, Pid, Priority};
use crate::pcb_table::PcbTable;
use crate::program::Program;
use crate::scheduler::Scheduler;

/// Owns every kernel component and is the sole entry point for raising
/// and handling interrupts. Holds no reference to the hardware it
/// drives; every operation that needs it takes `&mut impl Hardware`.
#[derive(Debug)]
pub struct Kernel {
    pub(crate) pcb_table: PcbTable,
    pub(crate) scheduler: Scheduler,
    pub(crate) memory_manager: MemoryManager,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) file_system: FileSystem,
    pub(crate) loader: Loader,
    pub(crate) io_controller: IoDeviceController,
    pub(crate) gantt: GanttRecorder,
    /// Reverse index from resident frame to its owning `(pid, page)`,
    /// so eviction can clear the victim's page-table entry without a
    /// linear scan of every PCB's page table.
    pub(crate) frame_owner: HashMap<FrameId, (Pid, PageId)>,
    /// Applied to the hardware timer the first time a round-robin
    /// dispatch hands the CPU to a process; ignored by every other
    /// scheduling policy.
    pub(crate) round_robin_quantum: Option<u32>,
}

impl Kernel {
    pub fn new(config: KernelConfig, scheduler: Scheduler) -> Self {
        Kernel {
            pcb_table: PcbTable::new(),
            scheduler,
            memory_manager: MemoryManager::new(config.total_frames()),
            dispatcher: Dispatcher::default(),
            file_system: FileSystem::new(),
            loader: Loader::new(config.frame_size),
            io_controller: IoDeviceController::new(),
            gantt: GanttRecorder::new(config.gantt_stop),
            frame_owner: HashMap::new(),
            round_robin_quantum: config.round_robin_quantum,
        }
    }

    /// Registers `program` at `path` so a later [`Kernel::run`] can load it.
    pub fn write_program(&mut self, path: impl Into<String>, program: Program) {
        self.file_system.write(path, program);
    }

    /// Raises a `NEW` interrupt for the program at `path`, admitting it
    /// at `priority` (see [`Priority::new`] for the valid range).
    pub fn run<H: Hardware>(&mut self, hardware: &mut H, path: &str, priority: u8) -> Result<(), KernelError> {
        let priority = Priority::new(priority)?;
        self.handle(
            hardware,
            Irq::New {
                path: path.to_string(),
                priority,
            },
        )
    }

    /// The interrupt vector: every state transition the kernel ever
    /// performs happens inside the handler this dispatches to.
    pub fn handle<H: Hardware>(&mut self, hardware: &mut H, irq: Irq) -> Result<(), KernelError> {
        match irq {
            Irq::New { path, priority } => interrupts::handle_new(self, hardware, &path, priority),
            Irq::Kill => interrupts::handle_kill(self, hardware),
            Irq::IoIn { instruction } => interrupts::handle_io_in(self, hardware, instruction),
            Irq::IoOut => interrupts::handle_io_out(self, hardware),
            Irq::Timeout => interrupts::handle_timeout(self, hardware),
            Irq::Stat => interrupts::handle_stat(self, hardware),
            Irq::PageFault { page } => interrupts::handle_page_fault(self, hardware, page),
        }
    }

    /// True while at least one admitted process has not yet terminated.
    /// The hardware's tick loop polls this to decide when to stop.
    pub fn has_live_processes(&self) -> bool {
        self.pcb_table.has_live_processes()
    }

    pub fn pcb_table(&self) -> &PcbTable {
        &self.pcb_table
    }

    pub fn gantt(&self) -> &GanttRecorder {
        &self.gantt
    }

    pub fn free_frame_count(&self) -> usize {
        self.memory_manager.free_count()
    }
}
