//! Hosted runner: drives the shell from the process's terminal.
//!
//! Stdin bytes become key codes and console output goes to stdout. For
//! key-by-key editing run it on a raw terminal (`stty raw -echo`); in cooked
//! mode whole lines arrive at once and still work. End of input exits.
//!
//! With `FATSHELL_SCREEN` set, output goes to an 80x25 cell screen instead,
//! which is repainted whenever the shell waits for a key.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Bytes, Read, Stdin, Write};
use std::process;
use std::rc::Rc;

use fatshell::constants::keys::*;
use fatshell::devices::screen::{TextScreen, SCREEN_HEIGHT};
use fatshell::devices::{Console, Keyboard};
use fatshell::filesys::fat16::Geometry;
use fatshell::logging;
use fatshell::shell::terminal::Terminal;
use fatshell::shell::Shell;
use log::LevelFilter;

const ESC: u8 = 0x1B;

type SharedScreen = Rc<RefCell<TextScreen>>;

struct StdinKeyboard {
    input: Bytes<Stdin>,
    /// Screen to repaint before blocking, in screen mode
    screen: Option<SharedScreen>,
}

impl StdinKeyboard {
    fn new(screen: Option<SharedScreen>) -> Self {
        StdinKeyboard {
            input: io::stdin().bytes(),
            screen,
        }
    }

    fn next_byte(&mut self) -> u8 {
        match self.input.next() {
            Some(Ok(byte)) => byte,
            Some(Err(err)) => {
                log::error!("stdin: {}", err);
                process::exit(1);
            }
            None => {
                let _ = io::stdout().flush();
                process::exit(0);
            }
        }
    }

    /// Maps `ESC [ A..D` to the arrows and `ESC [ 3 ~` to delete; any other
    /// sequence is dropped
    fn escape_sequence(&mut self) -> Option<u8> {
        if self.next_byte() != b'[' {
            return None;
        }
        match self.next_byte() {
            b'A' => Some(KEY_UP),
            b'B' => Some(KEY_DOWN),
            b'C' => Some(KEY_RIGHT),
            b'D' => Some(KEY_LEFT),
            b'3' => (self.next_byte() == b'~').then_some(KEY_DELETE),
            _ => None,
        }
    }
}

impl Keyboard for StdinKeyboard {
    fn next_key(&mut self) -> u8 {
        if let Some(screen) = &self.screen {
            let _ = paint(&screen.borrow());
        }
        let _ = io::stdout().flush();
        loop {
            match self.next_byte() {
                ESC => {
                    if let Some(key) = self.escape_sequence() {
                        return key;
                    }
                }
                byte => return byte,
            }
        }
    }
}

struct StdoutConsole {
    out: io::Stdout,
}

impl Console for StdoutConsole {
    fn put_char(&mut self, byte: u8) {
        let _ = self.out.write_all(&[byte]);
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        let _ = self.out.write_all(bytes);
    }

    fn clear(&mut self) {
        let _ = self.out.write_all(b"\x1b[2J\x1b[H");
    }
}

/// Console backed by the cell screen; nothing reaches stdout until `paint`
struct ScreenConsole {
    screen: SharedScreen,
}

impl Console for ScreenConsole {
    fn put_char(&mut self, byte: u8) {
        self.screen.borrow_mut().put_char(byte);
    }

    fn clear(&mut self) {
        self.screen.borrow_mut().clear();
    }
}

/// Redraws every row from the top left, then places the host cursor on the
/// screen cursor
fn paint(screen: &TextScreen) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(b"\x1b[H")?;
    for row in 0..SCREEN_HEIGHT {
        out.write_all(screen.row_text(row))?;
        out.write_all(b"\x1b[K")?;
        if row + 1 < SCREEN_HEIGHT {
            out.write_all(b"\r\n")?;
        }
    }
    let (row, column) = screen.cursor();
    write!(out, "\x1b[{};{}H", row + 1, column + 1)?;
    out.flush()
}

fn stderr_sink(args: fmt::Arguments) {
    eprintln!("{}", args);
}

fn init_logging() {
    if logging::init(stderr_sink).is_err() {
        return;
    }
    if let Ok(level) = std::env::var("FATSHELL_LOG") {
        match level.parse::<LevelFilter>() {
            Ok(level) => logging::set_level(level),
            Err(_) => log::warn!("ignoring FATSHELL_LOG={}", level),
        }
    }
}

fn main() {
    init_logging();

    let mut shell = match Shell::with_memory_volume(Geometry::default()) {
        Ok(shell) => shell,
        Err(err) => {
            eprintln!("fatshell: cannot format volume: {}", err);
            process::exit(1);
        }
    };

    let (mut keyboard, mut console): (StdinKeyboard, Box<dyn Console>) =
        if std::env::var_os("FATSHELL_SCREEN").is_some() {
            let screen = Rc::new(RefCell::new(TextScreen::new()));
            print!("\x1b[2J");
            (
                StdinKeyboard::new(Some(screen.clone())),
                Box::new(ScreenConsole { screen }) as Box<dyn Console>,
            )
        } else {
            (
                StdinKeyboard::new(None),
                Box::new(StdoutConsole { out: io::stdout() }) as Box<dyn Console>,
            )
        };

    let mut term = Terminal::new(&mut keyboard, &mut *console);
    shell.run(&mut term);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoKeys;

    impl Keyboard for NoKeys {
        fn next_key(&mut self) -> u8 {
            b'\n'
        }
    }

    #[test]
    fn test_screen_console_renders_shell_output() {
        let screen = Rc::new(RefCell::new(TextScreen::new()));
        let mut console = ScreenConsole {
            screen: screen.clone(),
        };
        let mut shell = Shell::with_memory_volume(Geometry::default()).unwrap();
        let mut keyboard = NoKeys;
        {
            let mut term = Terminal::new(&mut keyboard, &mut console);
            shell.execute("echo hi", &mut term);
            shell.execute("rev abc", &mut term);
        }
        assert_eq!(screen.borrow().row_text(0), b"hi");
        assert_eq!(screen.borrow().row_text(1), b"cba");
        assert_eq!(screen.borrow().cursor(), (2, 0));

        console.clear();
        assert_eq!(screen.borrow().row_text(0), b"");
    }
}
