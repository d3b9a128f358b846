//! Interactive command shell over the in-memory volume.
//!
//! A [`Shell`] owns all mutable state: the volume, the command history and
//! the line editor. It reads keys through a [`Terminal`], dispatches each
//! submitted line and prints diagnostics; no command failure ends the loop.

use crate::constants::shell::PROMPT;
use crate::filesys::block::memory::MemoryBlockDevice;
use crate::filesys::fat16::{constants::SECTOR_SIZE, Fat16, Geometry};
use crate::filesys::FsError;
use crate::term_println;
use alloc::boxed::Box;
use alloc::string::String;

pub mod commands;
pub mod error;
pub mod history;
pub mod line_editor;
pub mod pipe;
pub mod terminal;

use error::ShellError;
use history::History;
use line_editor::LineEditor;
use terminal::Terminal;

/// Splits a command at its first space. The remainder is passed on raw,
/// extra spaces included; only an empty remainder counts as absent.
pub fn split_command(command: &str) -> (&str, Option<&str>) {
    match command.split_once(' ') {
        Some((name, rest)) => (name, (!rest.is_empty()).then_some(rest)),
        None => (command, None),
    }
}

/// Integer prefix of `text` after leading blanks and an optional sign.
/// Anything without leading digits reads as 0; trailing junk is ignored.
pub fn leading_int(text: &str) -> i64 {
    let text = text.trim_start_matches([' ', '\t']);
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add((digit - b'0') as i64)
        });
    sign * magnitude
}

pub struct Shell {
    fs: Fat16,
    history: History,
    editor: LineEditor,
}

impl Shell {
    pub fn new(fs: Fat16) -> Self {
        Shell {
            fs,
            history: History::new(),
            editor: LineEditor::new(),
        }
    }

    /// Formats a fresh RAM volume of the given shape and opens a shell on it
    pub fn with_memory_volume(geometry: Geometry) -> Result<Self, FsError> {
        let device = MemoryBlockDevice::new(geometry.total_sectors(), SECTOR_SIZE);
        let fs = Fat16::format(Box::new(device), geometry)?;
        Ok(Shell::new(fs))
    }

    pub fn fs(&self) -> &Fat16 {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut Fat16 {
        &mut self.fs
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Short greeting printed once at start-up
    pub fn greet(&self, term: &mut Terminal) {
        term_println!(term, "=== FATSHELL ===");
        term_println!(term, "Type 'help' to list all commands.");
        term_println!(term, "Basic: ls, cat, touch, cp, mv, delete, echo, clear");
        term_println!(term, "Editing: copycon, edln, delln, insln, tee");
        term_println!(term, "System: whoami, date, free, history, man");
    }

    /// Prints the prompt and edits one line until Enter
    pub fn read_line(&mut self, term: &mut Terminal) -> String {
        term.put_bytes(PROMPT.as_bytes());
        self.editor.begin(&self.history);
        loop {
            let key = term.read_key();
            if let Some(line) = self.editor.handle_key(key, &mut self.history, term.console()) {
                return line;
            }
        }
    }

    /// Runs one line and reports any failure on the terminal
    pub fn execute(&mut self, line: &str, term: &mut Terminal) {
        if let Err(err) = self.dispatch(line, term) {
            log::debug!("'{}' failed: {:?}", line, err);
            term_println!(term, "{}", err);
        }
    }

    /// Routes a line either to the pipe evaluator or to the command table
    pub fn dispatch(&mut self, line: &str, term: &mut Terminal) -> Result<(), ShellError> {
        if let Some((left, right)) = line.split_once('|') {
            return pipe::run(&self.fs, left, right, term);
        }

        let (name, arg) = split_command(line);
        if name.is_empty() {
            return Ok(());
        }

        let command =
            commands::lookup(name).ok_or_else(|| ShellError::CommandNotFound(name.into()))?;
        if command.needs_arg && arg.is_none() {
            return Err(ShellError::BadArguments {
                usage: command.usage,
            });
        }

        log::debug!("dispatch '{}' ({:?})", command.name, arg);
        (command.handler)(self, arg, term)
    }

    /// Greets, then reads and runs lines forever
    pub fn run(&mut self, term: &mut Terminal) -> ! {
        self.greet(term);
        loop {
            let line = self.read_line(term);
            self.execute(&line, term);
        }
    }
}
