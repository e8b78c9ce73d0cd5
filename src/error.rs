use std::io;

use thiserror::Error;

/// Everything that can go wrong between opening a classfile and printing its
/// name. Each failure terminates the run; no variant is recoverable because
/// every offset in the pool depends on all earlier entries being sized right.
#[derive(Error, Debug)]
pub enum ClassFileError {
    #[error("failed to open '{path}': {source}")]
    Open { path: String, source: io::Error },

    #[error("invalid class file magic number {found:#010x}")]
    InvalidMagic { found: u32 },

    #[error("found an invalid constant pool tag {tag} at index {index} (offset {offset:#x})")]
    UnknownPoolTag { tag: u8, index: u16, offset: u64 },

    #[error("failed to read the constant pool entry at index {index} (offset {offset:#x})")]
    UnreadablePoolEntry { index: u16, offset: u64 },

    #[error("constant pool index {index} is out of range")]
    PoolIndexOutOfRange { index: u16 },

    #[error("truncated class file: {missing} byte(s) missing")]
    Truncated { missing: u64 },

    #[error(transparent)]
    Io(#[from] io::Error),
}
