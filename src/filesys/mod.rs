use core::fmt;
use core::result::Result;

pub mod block;
pub mod fat16;

// Define error types for the filesystem operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// Name does not resolve to a directory entry
    NotFound,
    /// Create collided with an existing name
    AlreadyExists,
    /// No free directory slot or no free cluster
    Full,
    /// Line-oriented delete ran past the end of the file
    LineNotPresent,
    /// Line numbers are 1-based
    InvalidLine,
    /// Content longer than the single sector a file owns
    FileTooLarge,
    /// Boot sector signature or BPB missing
    NotFormatted,
    /// Layout with no FAT, no root slots or no allocatable cluster
    InvalidGeometry,
    IOError,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::NotFound => write!(f, "file not found"),
            FsError::AlreadyExists => write!(f, "file already exists"),
            FsError::Full => write!(f, "no space left on volume"),
            FsError::LineNotPresent => write!(f, "line not present in file"),
            FsError::InvalidLine => write!(f, "line numbers start at 1"),
            FsError::FileTooLarge => write!(f, "file larger than one sector"),
            FsError::NotFormatted => write!(f, "volume is not formatted"),
            FsError::InvalidGeometry => write!(f, "invalid volume geometry"),
            FsError::IOError => write!(f, "block device I/O error"),
        }
    }
}

/// Represents a block device that can be read from and written to
pub trait BlockDevice: Send + Sync {
    fn read_block(&self, block_num: u64, buf: &mut [u8]) -> Result<(), FsError>;
    fn write_block(&mut self, block_num: u64, buf: &[u8]) -> Result<(), FsError>;
    fn block_size(&self) -> usize;
    fn total_blocks(&self) -> u64;
}
