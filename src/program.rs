//! Program encoding: an ordered sequence of `CPU` / `IO` / `EXIT` instructions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Consumes one CPU tick.
    Cpu,
    /// Triggers an IO_IN interrupt.
    Io,
    /// Triggers a KILL interrupt; terminal.
    Exit,
}

impl Instruction {
    pub fn is_exit(self) -> bool {
        matches!(self, Instruction::Exit)
    }
}

/// `n` consecutive CPU instructions, the common case for a compute burst.
pub fn cpu_burst(n: usize) -> Vec<Instruction> {
    vec![Instruction::Cpu; n]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    name: String,
    instructions: Vec<Instruction>,
}

impl Program {
    /// Builds a program, normalizing the tail to guarantee a terminal
    /// EXIT (appending one if the caller didn't already end with one).
    pub fn new(name: impl Into<String>, instructions: Vec<Instruction>) -> Self {
        let mut instructions = instructions;
        if instructions.last().map(|i| i.is_exit()) != Some(true) {
            instructions.push(Instruction::Exit);
        }
        Program {
            name: name.into(),
            instructions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of pages required to hold this program at `frame_size`
    /// instructions per page: `ceil(len / frame_size)`.
    pub fn required_pages(&self, frame_size: usize) -> usize {
        (self.instructions.len() + frame_size - 1) / frame_size
    }
}
