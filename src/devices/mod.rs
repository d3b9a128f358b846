//! Character devices the shell talks to.
//!
//! The shell only sees two byte-wide interfaces: a blocking keyboard that
//! yields decoded key codes and a console that accepts output bytes. Backends
//! supply the hardware (or the host terminal) behind them.

use crate::constants::keys::*;

pub mod screen;

#[cfg(test)]
pub mod testing;

/// Blocking source of decoded key codes
pub trait Keyboard {
    /// Waits for the next key. See [`Key`] for the code map.
    fn next_key(&mut self) -> u8;
}

/// Byte-oriented output sink
pub trait Console {
    fn put_char(&mut self, byte: u8);

    /// Blanks the display and homes the cursor
    fn clear(&mut self);

    fn put_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }
}

/// Decoded form of a key code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable ASCII, 0x20..=0x7E
    Char(u8),
    Enter,
    Backspace,
    /// Forward delete
    Delete,
    Up,
    Down,
    Left,
    Right,
    /// Ctrl plus a letter, carried as the uppercase letter
    Ctrl(u8),
    Other(u8),
}

impl From<u8> for Key {
    fn from(code: u8) -> Self {
        match code {
            KEY_ENTER | KEY_RETURN => Key::Enter,
            KEY_BACKSPACE | KEY_DEL => Key::Backspace,
            KEY_UP => Key::Up,
            KEY_DOWN => Key::Down,
            KEY_LEFT => Key::Left,
            KEY_RIGHT => Key::Right,
            KEY_DELETE => Key::Delete,
            0x01..=0x1A => Key::Ctrl(b'A' + code - 1),
            0x20..=0x7E => Key::Char(code),
            _ => Key::Other(code),
        }
    }
}
