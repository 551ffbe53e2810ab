//! Translates a program into per-page frame residency, pure demand paging.

use crate::error::KernelError;
use crate::fs::FileSystem;
use crate::hardware::Hardware;
use crate::pcb::{FrameId, PageId};

#[derive(Debug, Clone, Copy)]
pub struct Loader {
    frame_size: usize,
}

impl Loader {
    pub fn new(frame_size: usize) -> Self {
        Loader { frame_size }
    }

    /// Returns the page count a program at `path` requires. No physical
    /// frames are reserved; every page starts absent (caller fills in
    /// the PCB's page table with that many `None` entries).
    pub fn page_count(&self, fs: &FileSystem, path: &str) -> Result<usize, KernelError> {
        let program = fs.read(path)?;
        Ok(program.required_pages(self.frame_size))
    }

    /// Copies the slice of program instructions belonging to `page`
    /// into `frame`, at frame-relative offsets.
    pub fn load_page<H: Hardware>(
        &self,
        fs: &FileSystem,
        hardware: &mut H,
        path: &str,
        page: PageId,
        frame: FrameId,
    ) -> Result<(), KernelError> {
        let program = fs.read(path)?;
        let start = page.0 * self.frame_size;
        let end = ((page.0 + 1) * self.frame_size).min(program.len());
        for i in start..end {
            let address = frame.0 * self.frame_size + (i % self.frame_size);
            hardware.write_memory(address, program.instructions()[i]);
        }
        Ok(())
    }
}
