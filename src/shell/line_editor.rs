//! Interactive single-line editor with cursor movement and history recall.
//!
//! The editor never owns the screen. It echoes through a [`Console`] using
//! only `\r`, `\b` and overwrites, so it works on any dumb character cell
//! display.

use super::history::History;
use crate::constants::shell::{MAX_LINE, PROMPT};
use crate::devices::{Console, Key};
use alloc::string::String;
use arrayvec::ArrayVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Editing,
    Submitted,
}

pub struct LineEditor {
    buffer: ArrayVec<u8, MAX_LINE>,
    cursor: usize,
    /// History position being browsed; equal to the history count when the
    /// user is on the fresh line
    hist_pos: usize,
    /// Bytes currently shown after the prompt
    drawn: usize,
    state: EditorState,
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEditor {
    pub fn new() -> Self {
        LineEditor {
            buffer: ArrayVec::new(),
            cursor: 0,
            hist_pos: 0,
            drawn: 0,
            state: EditorState::Idle,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Starts a fresh line. The caller has already printed the prompt.
    pub fn begin(&mut self, history: &History) {
        self.buffer.clear();
        self.cursor = 0;
        self.drawn = 0;
        self.hist_pos = history.count();
        self.state = EditorState::Editing;
    }

    /// Feeds one key. Returns the submitted line on Enter; the line is
    /// recorded in `history` unless empty.
    pub fn handle_key(
        &mut self,
        code: u8,
        history: &mut History,
        console: &mut dyn Console,
    ) -> Option<String> {
        if self.state != EditorState::Editing {
            self.begin(history);
        }

        match Key::from(code) {
            Key::Enter => return Some(self.submit(history, console)),
            Key::Char(byte) => self.insert(byte, console),
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buffer.remove(self.cursor);
                    self.redraw(console);
                }
            }
            Key::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                    self.redraw(console);
                }
            }
            Key::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    console.put_char(b'\x08');
                }
            }
            Key::Right => {
                if self.cursor < self.buffer.len() {
                    console.put_char(self.buffer[self.cursor]);
                    self.cursor += 1;
                }
            }
            Key::Up => {
                if self.hist_pos > history.oldest() {
                    self.hist_pos -= 1;
                    self.recall(history.get(self.hist_pos).unwrap_or_default(), console);
                }
            }
            Key::Down => {
                if self.hist_pos < history.count() {
                    self.hist_pos += 1;
                    let entry = history.get(self.hist_pos).unwrap_or_default();
                    self.recall(entry, console);
                }
            }
            Key::Ctrl(_) | Key::Other(_) => {}
        }

        None
    }

    fn insert(&mut self, byte: u8, console: &mut dyn Console) {
        if self.buffer.is_full() {
            return;
        }

        self.buffer.insert(self.cursor, byte);
        self.cursor += 1;

        // Echo from the inserted byte to the end, then walk back
        console.put_bytes(&self.buffer[self.cursor - 1..]);
        for _ in self.cursor..self.buffer.len() {
            console.put_char(b'\x08');
        }
        self.drawn = self.drawn.max(self.buffer.len());
    }

    fn recall(&mut self, entry: &str, console: &mut dyn Console) {
        self.buffer.clear();
        let len = entry.len().min(MAX_LINE);
        self.buffer.extend(entry.as_bytes()[..len].iter().copied());
        self.cursor = self.buffer.len();
        self.redraw(console);
    }

    /// `\r`, prompt, buffer, blanks over the stale tail, then `\r`, prompt
    /// and the buffer up to the cursor
    fn redraw(&mut self, console: &mut dyn Console) {
        console.put_char(b'\r');
        console.put_bytes(PROMPT.as_bytes());
        console.put_bytes(&self.buffer);
        for _ in self.buffer.len()..self.drawn {
            console.put_char(b' ');
        }
        console.put_char(b'\r');
        console.put_bytes(PROMPT.as_bytes());
        console.put_bytes(&self.buffer[..self.cursor]);
        self.drawn = self.buffer.len();
    }

    fn submit(&mut self, history: &mut History, console: &mut dyn Console) -> String {
        self.state = EditorState::Submitted;
        console.put_char(b'\n');

        let line: String = self.buffer.iter().map(|&b| b as char).collect();
        history.push(&line);
        log::trace!("line submitted ({} bytes)", line.len());

        self.buffer.clear();
        self.cursor = 0;
        self.drawn = 0;
        self.state = EditorState::Idle;
        line
    }
}
