//! Read-only views over file content.
//!
//! None of these touch the volume; the shell reads the file and hands the
//! bytes in.

use crate::filesys::fat16::constants::SECTOR_SIZE;
use core::fmt::{self, Write};

/// Line, word and byte counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCount {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Words are runs of bytes between spaces, tabs and newlines. Lines are
/// counted by newline, so a trailing unterminated line does not count.
pub fn word_count(bytes: &[u8]) -> WordCount {
    let mut count = WordCount {
        chars: bytes.len(),
        ..WordCount::default()
    };
    let mut in_word = false;

    for &byte in bytes {
        if byte == b'\n' {
            count.lines += 1;
        }
        if is_separator(byte) {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count.words += 1;
        }
    }

    count
}

/// Writes 16 bytes per row: offset, hex column padded to full width, then
/// the printable rendering with `.` for everything else
pub fn hexdump<W: Write>(bytes: &[u8], out: &mut W) -> fmt::Result {
    for (row, chunk) in bytes.chunks(16).enumerate() {
        write!(out, "{:04x}: ", row * 16)?;
        for column in 0..16 {
            match chunk.get(column) {
                Some(byte) => write!(out, "{:02x} ", byte)?,
                None => out.write_str("   ")?,
            }
        }
        out.write_char(' ')?;
        for &byte in chunk {
            let shown = if (0x20..0x7F).contains(&byte) {
                byte as char
            } else {
                '.'
            };
            out.write_char(shown)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Plain substring test; the empty needle is found everywhere
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

/// Newline-terminated lines containing `pattern`, numbered from 1. A final
/// line without its newline is never considered.
pub fn grep<'a>(pattern: &'a [u8], bytes: &'a [u8]) -> impl Iterator<Item = (usize, &'a [u8])> + 'a {
    let terminated = bytes
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|last| &bytes[..last]);

    terminated
        .into_iter()
        .flat_map(|body| body.split(|&b| b == b'\n'))
        .enumerate()
        .filter(move |(_, line)| contains(line, pattern))
        .map(|(index, line)| (index + 1, line))
}

/// Every line of a stream, the trailing unterminated one included. Used on
/// pipe buffers, which carry no final newline.
pub fn stream_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let lines = if bytes.is_empty() {
        None
    } else {
        Some(body.split(|&b| b == b'\n'))
    };
    lines.into_iter().flatten()
}

/// Prefix through the `lines`-th newline
pub fn head(bytes: &[u8], lines: usize) -> &[u8] {
    let mut seen = 0;
    for (index, &byte) in bytes.iter().enumerate() {
        if seen == lines {
            return &bytes[..index];
        }
        if byte == b'\n' {
            seen += 1;
        }
    }
    bytes
}

/// Suffix holding the last `lines` newline-terminated lines, plus whatever
/// trails the final newline
pub fn tail(bytes: &[u8], lines: usize) -> &[u8] {
    let total = bytes.iter().filter(|&&b| b == b'\n').count();
    let start_line = if total > lines { total - lines + 1 } else { 1 };

    let mut current = 1;
    for (index, &byte) in bytes.iter().enumerate() {
        if current >= start_line {
            return &bytes[index..];
        }
        if byte == b'\n' {
            current += 1;
        }
    }
    &bytes[bytes.len()..]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Empty,
    /// Content wrapped in `[` and `]`, as written by `mkdir`
    SimulatedDirectory,
    Text,
}

impl FileKind {
    pub fn describe(&self) -> &'static str {
        match self {
            FileKind::Empty => "empty file",
            FileKind::SimulatedDirectory => "simulated directory",
            FileKind::Text => "ASCII text",
        }
    }
}

pub fn file_kind(bytes: &[u8]) -> FileKind {
    match (bytes.first(), bytes.last()) {
        (None, _) => FileKind::Empty,
        (Some(b'['), Some(b']')) => FileKind::SimulatedDirectory,
        _ => FileKind::Text,
    }
}

/// Sectors occupied by `size` bytes
pub fn disk_usage_sectors(size: usize) -> usize {
    size.div_ceil(SECTOR_SIZE)
}
