//! Key codes delivered by the keyboard device.

pub const KEY_ENTER: u8 = b'\n';
pub const KEY_RETURN: u8 = b'\r';
pub const KEY_BACKSPACE: u8 = 0x08;

/// DEL, sent by many terminals for backspace
pub const KEY_DEL: u8 = 0x7F;

/// Synthetic navigation codes, above the ASCII range
pub const KEY_UP: u8 = 0x80;
pub const KEY_DOWN: u8 = 0x81;
pub const KEY_LEFT: u8 = 0x82;
pub const KEY_RIGHT: u8 = 0x83;
pub const KEY_DELETE: u8 = 0x84;

pub const CTRL_D: u8 = 0x04;
pub const CTRL_Z: u8 = 0x1A;
