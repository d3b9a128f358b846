//! Fixed-capacity command history.

use crate::constants::shell::{HISTORY_SIZE, MAX_LINE};
use arrayvec::ArrayString;

/// Ring of the last [`HISTORY_SIZE`] submitted commands. Entries are
/// addressed by their absolute submission index, which keeps growing after
/// old entries are overwritten.
pub struct History {
    slots: [ArrayString<MAX_LINE>; HISTORY_SIZE],
    count: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        History {
            slots: [ArrayString::new(); HISTORY_SIZE],
            count: 0,
        }
    }

    /// Records a command; empty lines are ignored
    pub fn push(&mut self, command: &str) {
        if command.is_empty() {
            return;
        }

        let slot = &mut self.slots[self.count % HISTORY_SIZE];
        slot.clear();
        for c in command.chars() {
            if slot.try_push(c).is_err() {
                break;
            }
        }
        self.count += 1;
    }

    /// Total number of commands ever recorded
    pub fn count(&self) -> usize {
        self.count
    }

    /// Absolute index of the oldest entry still retained
    pub fn oldest(&self) -> usize {
        self.count.saturating_sub(HISTORY_SIZE)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        if index < self.oldest() || index >= self.count {
            return None;
        }
        Some(self.slots[index % HISTORY_SIZE].as_str())
    }

    /// Retained entries, oldest first, with their 1-based absolute numbers
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (self.oldest()..self.count).filter_map(move |index| Some((index + 1, self.get(index)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn test_ignores_empty() {
        let mut history = History::new();
        history.push("");
        assert_eq!(history.count(), 0);
        assert_eq!(history.iter().count(), 0);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut history = History::new();
        for i in 0..12 {
            history.push(&format!("cmd{}", i));
        }

        assert_eq!(history.count(), 12);
        assert_eq!(history.oldest(), 2);
        assert_eq!(history.get(1), None);
        assert_eq!(history.get(2), Some("cmd2"));
        assert_eq!(history.get(11), Some("cmd11"));
        assert_eq!(history.get(12), None);

        let numbered: Vec<_> = history.iter().map(|(n, _)| n).collect();
        assert_eq!(numbered, (3..=12).collect::<Vec<_>>());
    }
}
