//! Kernel error taxonomy.
//!
//! Only [`KernelError::ProgramNotFound`] and [`KernelError::InvalidPriority`]
//! are ever returned from [`crate::Kernel::run`]: the other two variants
//! describe states a handler logs and recovers from in place rather
//! than propagating.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("no program registered at path {0:?}")]
    ProgramNotFound(String),

    #[error("priority {0} out of range 0..=4")]
    InvalidPriority(u8),

    #[error("interrupt handled with no running process")]
    NoRunningProcess,

    #[error("page fault with no free frame and no victim to evict")]
    OutOfFrames,
}
