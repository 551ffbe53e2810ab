//! Flat path -> program store. No persistence, no concurrent writers.

use std::collections::HashMap;

use crate::error::KernelError;
use crate::program::Program;

#[derive(Debug, Default)]
pub struct FileSystem {
    programs: HashMap<String, Program>,
}

impl FileSystem {
    pub fn new() -> Self {
        FileSystem::default()
    }

    /// Overwrites any existing program at `path`.
    pub fn write(&mut self, path: impl Into<String>, program: Program) {
        self.programs.insert(path.into(), program);
    }

    pub fn read(&self, path: &str) -> Result<&Program, KernelError> {
        self.programs
            .get(path)
            .ok_or_else(|| KernelError::ProgramNotFound(path.to_string()))
    }
}
