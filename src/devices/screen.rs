//! In-memory 80x25 character cell display.

use super::Console;

pub const SCREEN_WIDTH: usize = 80;
pub const SCREEN_HEIGHT: usize = 25;

/// Character cells plus a cursor. `\b` only moves the cursor; erasing is
/// the writer's job (`\b \b`).
pub struct TextScreen {
    cells: [[u8; SCREEN_WIDTH]; SCREEN_HEIGHT],
    row: usize,
    column: usize,
}

impl Default for TextScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TextScreen {
    pub const fn new() -> Self {
        TextScreen {
            cells: [[b' '; SCREEN_WIDTH]; SCREEN_HEIGHT],
            row: 0,
            column: 0,
        }
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Row contents with trailing blanks removed
    pub fn row_text(&self, row: usize) -> &[u8] {
        let cells = &self.cells[row];
        let end = cells
            .iter()
            .rposition(|&b| b != b' ')
            .map_or(0, |pos| pos + 1);
        &cells[..end]
    }

    fn scroll_up(&mut self) {
        self.cells.copy_within(1.., 0);
        self.cells[SCREEN_HEIGHT - 1] = [b' '; SCREEN_WIDTH];
        self.row = SCREEN_HEIGHT - 1;
    }
}

impl Console for TextScreen {
    fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.column = 0;
                self.row += 1;
            }
            b'\r' => self.column = 0,
            0x08 => self.column = self.column.saturating_sub(1),
            _ => {
                self.cells[self.row][self.column] = byte;
                self.column += 1;
                if self.column >= SCREEN_WIDTH {
                    self.column = 0;
                    self.row += 1;
                }
            }
        }

        if self.row >= SCREEN_HEIGHT {
            self.scroll_up();
        }
    }

    fn clear(&mut self) {
        *self = TextScreen::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters() {
        let mut screen = TextScreen::new();
        screen.put_bytes(b"abc\rX\nde\x08\x08f");
        assert_eq!(screen.row_text(0), b"Xbc");
        assert_eq!(screen.row_text(1), b"fe");
        assert_eq!(screen.cursor(), (1, 1));

        screen.put_bytes(b"\x08\x08\x08");
        assert_eq!(screen.cursor(), (1, 0));
    }

    #[test]
    fn test_wraps_at_width() {
        let mut screen = TextScreen::new();
        screen.put_bytes(&[b'x'; SCREEN_WIDTH + 2]);
        assert_eq!(screen.row_text(0).len(), SCREEN_WIDTH);
        assert_eq!(screen.row_text(1), b"xx");
        assert_eq!(screen.cursor(), (1, 2));
    }

    #[test]
    fn test_scrolls_when_full() {
        let mut screen = TextScreen::new();
        for line in 0..SCREEN_HEIGHT as u8 {
            screen.put_char(b'a' + line);
            screen.put_char(b'\n');
        }

        assert_eq!(screen.row_text(0), b"b");
        assert_eq!(screen.row_text(SCREEN_HEIGHT - 2), b"y");
        assert_eq!(screen.row_text(SCREEN_HEIGHT - 1), b"");
        assert_eq!(screen.cursor(), (SCREEN_HEIGHT - 1, 0));
    }

    #[test]
    fn test_clear() {
        let mut screen = TextScreen::new();
        screen.put_bytes(b"hello\nworld");
        screen.clear();
        assert_eq!(screen.row_text(0), b"");
        assert_eq!(screen.cursor(), (0, 0));
    }
}
