//! Shell-wide constants and key codes.
//!
//! Volume layout constants live next to the driver in
//! `filesys::fat16::constants`.

pub mod keys;
pub mod shell;
