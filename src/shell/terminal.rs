//! Keyboard and console bundled for command handlers.

use crate::devices::{Console, Keyboard};
use core::fmt;

pub struct Terminal<'a> {
    keyboard: &'a mut dyn Keyboard,
    console: &'a mut dyn Console,
}

impl<'a> Terminal<'a> {
    pub fn new(keyboard: &'a mut dyn Keyboard, console: &'a mut dyn Console) -> Self {
        Terminal { keyboard, console }
    }

    /// Blocks until a key arrives
    pub fn read_key(&mut self) -> u8 {
        self.keyboard.next_key()
    }

    pub fn put_char(&mut self, byte: u8) {
        self.console.put_char(byte);
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.console.put_bytes(bytes);
    }

    pub fn clear(&mut self) {
        self.console.clear();
    }

    /// Raw access for code that only draws, such as the line editor
    pub fn console(&mut self) -> &mut dyn Console {
        &mut *self.console
    }
}

impl fmt::Write for Terminal<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.console.put_bytes(s.as_bytes());
        Ok(())
    }
}

/// Prints formatted text to a [`Terminal`].
///
/// # Examples
/// ```ignore
/// term_print!(term, "{} bytes", size);
/// ```
#[macro_export]
macro_rules! term_print {
    ($term:expr, $($arg:tt)*) => {{
        // Writing to a console cannot fail
        let _ = core::fmt::Write::write_fmt(&mut *$term, format_args!($($arg)*));
    }};
}

/// Prints formatted text to a [`Terminal`], followed by a newline.
#[macro_export]
macro_rules! term_println {
    ($term:expr) => ($crate::term_print!($term, "\n"));
    ($term:expr, $($arg:tt)*) => ($crate::term_print!($term, "{}\n", format_args!($($arg)*)));
}
