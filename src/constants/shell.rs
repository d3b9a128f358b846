//! Command line and pipe limits.

/// Input buffer size including the terminator slot; lines hold one less
pub const CMD_BUFSIZE: usize = 128;

/// Longest line the editor accepts
pub const MAX_LINE: usize = CMD_BUFSIZE - 1;

/// Number of commands kept for recall
pub const HISTORY_SIZE: usize = 10;

/// Capacity of the scratch buffer between two pipe stages
pub const PIPE_BUFFER_SIZE: usize = 4096;

pub const PROMPT: &str = "shell> ";

/// Default line count for head and tail
pub const DEFAULT_LINES: usize = 10;

/// Keyboard capture limits
pub const COPYCON_LIMIT: usize = 511;
pub const TEE_LIMIT: usize = 255;

/// Repetitions printed by `yes`
pub const YES_REPEAT: usize = 10;

/// Lines shown by the file form of `uniq`
pub const UNIQ_LINES: usize = 5;

/// Longest name `mkdir` keeps so that `[name]` fits a name field
pub const DIR_NAME_MAX: usize = 9;

pub const CURRENT_DIR: &str = "/root";
pub const USER_NAME: &str = "root";
pub const SYSTEM_NAME: &str = "fatshell 1.0 i686";
pub const FIXED_DATE: &str = "Mon Dec  1 12:00:00 UTC 2024";
