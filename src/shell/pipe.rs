//! Single-stage pipes between a fixed set of producers and consumers.
//!
//! The left command writes into a bounded scratch buffer instead of the
//! console; the right command reads that buffer. Neither side goes through
//! the general command table.

use super::error::{PipeSide, ShellError};
use super::{leading_int, split_command};
use super::terminal::Terminal;
use crate::constants::shell::*;
use crate::filesys::fat16::Fat16;
use crate::inspect;
use crate::term_println;
use alloc::string::String;
use arrayvec::ArrayVec;

/// Output of the left side of a pipe
pub struct PipeBuffer {
    bytes: ArrayVec<u8, PIPE_BUFFER_SIZE>,
}

impl Default for PipeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PipeBuffer {
    pub fn new() -> Self {
        PipeBuffer {
            bytes: ArrayVec::new(),
        }
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), ShellError> {
        self.bytes
            .try_extend_from_slice(bytes)
            .map_err(|_| ShellError::PipeOverflow)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn text(&self) -> String {
        self.bytes.iter().map(|&b| b as char).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Producer<'a> {
    List,
    Cat(&'a str),
    Echo(&'a str),
    Rev(&'a str),
    Date,
    WhoAmI,
    Uname,
}

impl<'a> Producer<'a> {
    pub fn parse(command: &'a str) -> Result<Self, ShellError> {
        let producer = match split_command(command) {
            ("ls", None) => Producer::List,
            ("cat", Some(name)) => Producer::Cat(name),
            ("echo", Some(text)) => Producer::Echo(text),
            ("rev", Some(text)) => Producer::Rev(text),
            ("date", None) => Producer::Date,
            ("whoami", None) => Producer::WhoAmI,
            ("uname", None) => Producer::Uname,
            _ => return Err(ShellError::Unsupported(command.into())),
        };
        Ok(producer)
    }

    pub fn fill(&self, fs: &Fat16, out: &mut PipeBuffer) -> Result<(), ShellError> {
        match *self {
            Producer::List => {
                for (position, (_, entry)) in fs.entries()?.iter().enumerate() {
                    if position > 0 {
                        out.push_bytes(b"\n")?;
                    }
                    out.push_bytes(entry.dotted_name().as_bytes())?;
                }
                Ok(())
            }
            Producer::Cat(name) => {
                let data = fs.read(name).map_err(|err| ShellError::from_fs(err, name))?;
                out.push_bytes(data.bytes())
            }
            Producer::Echo(text) => out.push_bytes(text.as_bytes()),
            Producer::Rev(text) => {
                for byte in text.bytes().rev() {
                    out.push_bytes(&[byte])?;
                }
                Ok(())
            }
            Producer::Date => out.push_bytes(FIXED_DATE.as_bytes()),
            Producer::WhoAmI => out.push_bytes(USER_NAME.as_bytes()),
            Producer::Uname => out.push_bytes(SYSTEM_NAME.as_bytes()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumer<'a> {
    Grep(&'a str),
    Count,
    Head(usize),
    Tail,
    Rev,
    Sort,
    Uniq,
    Cut,
}

impl<'a> Consumer<'a> {
    pub fn parse(command: &'a str) -> Option<Self> {
        let consumer = match split_command(command) {
            ("grep", Some(pattern)) => Consumer::Grep(pattern),
            ("wc", None) | ("wc", Some("-l")) => Consumer::Count,
            ("head", count) => Consumer::Head(head_count(count)),
            ("tail", _) => Consumer::Tail,
            ("rev", None) => Consumer::Rev,
            ("sort", _) => Consumer::Sort,
            ("uniq", None) => Consumer::Uniq,
            ("cut", Some(_)) => Consumer::Cut,
            _ => return None,
        };
        Some(consumer)
    }

    pub fn consume(&self, input: &PipeBuffer, term: &mut Terminal) {
        let bytes = input.as_bytes();
        match *self {
            Consumer::Grep(pattern) => {
                term_println!(term, "Searching for '{}' in output:", pattern);
                for line in inspect::stream_lines(bytes) {
                    if inspect::contains(line, pattern.as_bytes()) {
                        term.put_bytes(line);
                        term.put_char(b'\n');
                    }
                }
            }
            Consumer::Count => {
                let count = inspect::word_count(bytes);
                term_println!(term, "  {}  {}  {}", count.lines, count.words, count.chars);
            }
            Consumer::Head(lines) => {
                for line in inspect::stream_lines(bytes).take(lines) {
                    term.put_bytes(line);
                    term.put_char(b'\n');
                }
            }
            Consumer::Tail => {
                term_println!(term, "Last lines of output:");
                term_println!(term, "{}", input.text());
            }
            Consumer::Rev => {
                term_println!(term, "Reversed text:");
                for &byte in bytes.iter().rev() {
                    term.put_char(byte);
                }
                term.put_char(b'\n');
            }
            Consumer::Sort => {
                term_println!(term, "Sorted content (simulated):");
                term_println!(term, "{}", input.text());
            }
            Consumer::Uniq => {
                term_println!(term, "Unique lines:");
                term_println!(term, "{}", input.text());
            }
            Consumer::Cut => {
                term_println!(term, "Extracted fields:");
                term_println!(term, "{}", input.text());
            }
        }
    }
}

/// A count must start with a digit after any spaces; `head -3` keeps the
/// default. Trailing junk after the digits is ignored.
fn head_count(text: Option<&str>) -> usize {
    match text.map(|text| text.trim_start_matches(' ')) {
        Some(text) if text.starts_with(|c: char| c.is_ascii_digit()) => {
            usize::try_from(leading_int(text)).unwrap_or(usize::MAX)
        }
        _ => DEFAULT_LINES,
    }
}

/// Runs `left | right`. Both sides arrive untrimmed.
pub fn run(fs: &Fat16, left: &str, right: &str, term: &mut Terminal) -> Result<(), ShellError> {
    let left = left.trim_matches(' ');
    let right = right.trim_matches(' ');
    if left.is_empty() {
        return Err(ShellError::EmptyPipeStage(PipeSide::Before));
    }
    if right.is_empty() {
        return Err(ShellError::EmptyPipeStage(PipeSide::After));
    }

    log::debug!("pipe: '{}' | '{}'", left, right);
    let producer = Producer::parse(left)?;
    let mut buffer = PipeBuffer::new();
    producer.fill(fs, &mut buffer)?;

    match Consumer::parse(right) {
        Some(consumer) => {
            consumer.consume(&buffer, term);
            Ok(())
        }
        None => Err(ShellError::UnsupportedConsumer {
            command: right.into(),
            output: buffer.text(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_parse() {
        assert_eq!(Producer::parse("echo hi there"), Ok(Producer::Echo("hi there")));
        assert_eq!(Producer::parse("date"), Ok(Producer::Date));
        assert_eq!(
            Producer::parse("history"),
            Err(ShellError::Unsupported("history".into()))
        );
        assert_eq!(
            Producer::parse("cat"),
            Err(ShellError::Unsupported("cat".into()))
        );
    }

    #[test]
    fn test_consumer_parse() {
        assert_eq!(Consumer::parse("wc -l"), Some(Consumer::Count));
        assert_eq!(Consumer::parse("head 3"), Some(Consumer::Head(3)));
        assert_eq!(Consumer::parse("head"), Some(Consumer::Head(DEFAULT_LINES)));
        assert_eq!(Consumer::parse("grep"), None);
        assert_eq!(Consumer::parse("wc -c"), None);
        assert_eq!(Consumer::parse("less"), None);
    }

    #[test]
    fn test_head_count_takes_leading_digits() {
        assert_eq!(Consumer::parse("head 3x"), Some(Consumer::Head(3)));
        assert_eq!(Consumer::parse("head   2"), Some(Consumer::Head(2)));
        assert_eq!(Consumer::parse("head 0"), Some(Consumer::Head(0)));
        assert_eq!(Consumer::parse("head -3"), Some(Consumer::Head(DEFAULT_LINES)));
        assert_eq!(Consumer::parse("head x"), Some(Consumer::Head(DEFAULT_LINES)));
    }

    #[test]
    fn test_simplified_consumers_parse() {
        assert_eq!(Consumer::parse("tail"), Some(Consumer::Tail));
        assert_eq!(Consumer::parse("tail 3"), Some(Consumer::Tail));
        assert_eq!(Consumer::parse("sort -r"), Some(Consumer::Sort));
        assert_eq!(Consumer::parse("uniq"), Some(Consumer::Uniq));
        assert_eq!(Consumer::parse("uniq -c"), None);
        assert_eq!(Consumer::parse("cut -d, -f1"), Some(Consumer::Cut));
        assert_eq!(Consumer::parse("cut"), None);
        assert_eq!(Consumer::parse("rev"), Some(Consumer::Rev));
        assert_eq!(Consumer::parse("rev x"), None);
    }

    #[test]
    fn test_buffer_overflow_is_reported() {
        let mut buffer = PipeBuffer::new();
        buffer.push_bytes(&[b'x'; PIPE_BUFFER_SIZE]).unwrap();
        assert_eq!(buffer.push_bytes(b"y"), Err(ShellError::PipeOverflow));
        assert_eq!(buffer.as_bytes().len(), PIPE_BUFFER_SIZE);
    }
}
