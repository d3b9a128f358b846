//! Scripted devices for driving the shell from tests.

use super::{Console, Keyboard};
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

/// Replays a fixed key sequence. Running dry is a test bug and panics.
#[derive(Default)]
pub struct ScriptedKeyboard {
    keys: VecDeque<u8>,
}

impl ScriptedKeyboard {
    pub fn new(keys: &[u8]) -> Self {
        ScriptedKeyboard {
            keys: keys.iter().copied().collect(),
        }
    }

    pub fn push(&mut self, keys: &[u8]) {
        self.keys.extend(keys.iter().copied());
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl Keyboard for ScriptedKeyboard {
    fn next_key(&mut self) -> u8 {
        self.keys.pop_front().expect("keyboard script exhausted")
    }
}

/// Records every byte written, and how often the screen was cleared
#[derive(Default)]
pub struct Transcript {
    pub bytes: Vec<u8>,
    pub clears: usize,
}

impl Transcript {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Drops what was recorded so far
    pub fn take(&mut self) -> String {
        let text = self.text();
        self.bytes.clear();
        text
    }
}

impl Console for Transcript {
    fn put_char(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
