use crate::constants::shell::PIPE_BUFFER_SIZE;
use crate::filesys::FsError;
use alloc::string::String;
use core::fmt;

/// Which side of a `|` was left blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeSide {
    Before,
    After,
}

/// Diagnostics a command can end with. Every variant is printed to the
/// console; none of them stop the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    NotFound(String),
    AlreadyExists(String),
    Full,
    BadArguments { usage: &'static str },
    InvalidNumber(String),
    /// Left side of a pipe is not a known producer
    Unsupported(String),
    /// Right side of a pipe is not a known consumer; carries the
    /// producer's output so it is not lost
    UnsupportedConsumer { command: String, output: String },
    LineNotPresent { name: String, line: usize },
    EmptyPipeStage(PipeSide),
    PipeOverflow,
    CommandNotFound(String),
    Storage(FsError),
}

impl ShellError {
    /// Attaches the file name to the storage errors that mention one
    pub fn from_fs(err: FsError, name: &str) -> Self {
        match err {
            FsError::NotFound => ShellError::NotFound(name.into()),
            FsError::AlreadyExists => ShellError::AlreadyExists(name.into()),
            FsError::Full => ShellError::Full,
            other => ShellError::Storage(other),
        }
    }
}

impl From<FsError> for ShellError {
    fn from(err: FsError) -> Self {
        ShellError::Storage(err)
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::NotFound(name) => write!(f, "file not found: {}", name),
            ShellError::AlreadyExists(name) => write!(f, "file already exists: {}", name),
            ShellError::Full => write!(f, "error: no space left on volume"),
            ShellError::BadArguments { usage } => write!(f, "usage: {}", usage),
            ShellError::InvalidNumber(text) => {
                write!(f, "error: '{}' is not a valid line number", text)
            }
            ShellError::Unsupported(command) => write!(
                f,
                "error: command '{}' not supported in pipes\n\
                 supported producers: ls, cat <file>, echo <text>, rev <text>, date, whoami, uname",
                command
            ),
            ShellError::UnsupportedConsumer { command, output } => write!(
                f,
                "error: command '{}' not supported as pipe consumer\n\
                 supported consumers: grep <pattern>, wc, head [n], tail [n], rev, sort, uniq, cut\n\
                 output of first command:\n{}",
                command, output
            ),
            ShellError::LineNotPresent { name, line } => {
                write!(f, "line {} does not exist in file {}", line, name)
            }
            ShellError::EmptyPipeStage(PipeSide::Before) => {
                write!(f, "error: empty command before pipe")
            }
            ShellError::EmptyPipeStage(PipeSide::After) => {
                write!(f, "error: empty command after pipe")
            }
            ShellError::PipeOverflow => write!(
                f,
                "error: pipe output exceeds {} bytes",
                PIPE_BUFFER_SIZE
            ),
            ShellError::CommandNotFound(name) => write!(f, "command not found: {}", name),
            ShellError::Storage(err) => write!(f, "error: {}", err),
        }
    }
}
