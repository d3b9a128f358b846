//! Line-oriented editing on top of the single-sector file store.
//!
//! Each operation is split into a pure byte transform over the old content
//! and a thin wrapper that reads the file, runs the transform and writes the
//! result back. Lines are 1-based and separated by `\n`. All three transforms
//! truncate silently rather than fail when the sector fills up.

use crate::filesys::fat16::{constants::SECTOR_SIZE, Fat16};
use crate::filesys::FsError;
use arrayvec::ArrayVec;

/// New file content under construction; never longer than one sector
pub type SectorBuffer = ArrayVec<u8, SECTOR_SIZE>;

/// Copy limit shared by the edit and delete transforms
const COPY_LIMIT: usize = SECTOR_SIZE - 1;

/// Copy and padding limit of the insert transform, and the padding limit of
/// edit; leaves room for one trailing newline
const PAD_LIMIT: usize = SECTOR_SIZE - 2;

/// Appends `text\n` when it fits strictly below the copy limit
fn push_line(out: &mut SectorBuffer, text: &[u8]) {
    if out.len() + text.len() < COPY_LIMIT {
        out.extend(text.iter().copied());
        out.push(b'\n');
    }
}

/// Index just past the end of the line starting at `pos`, newline included
fn skip_line(content: &[u8], pos: usize) -> usize {
    match content[pos..].iter().position(|&b| b == b'\n') {
        Some(offset) => pos + offset + 1,
        None => content.len(),
    }
}

/// Replaces line `line` with `text`, padding with blank lines when the file
/// is shorter
pub fn replace_line(content: &[u8], line: usize, text: &[u8]) -> SectorBuffer {
    let mut out = SectorBuffer::new();
    let mut current = 1;
    let mut pos = 0;
    let mut replaced = false;

    while pos < content.len() && out.len() < COPY_LIMIT {
        if current == line && !replaced {
            push_line(&mut out, text);
            replaced = true;
            pos = skip_line(content, pos);
            current += 1;
        } else {
            if content[pos] == b'\n' {
                current += 1;
            }
            out.push(content[pos]);
            pos += 1;
        }
    }

    if !replaced {
        while current < line && out.len() < PAD_LIMIT {
            out.push(b'\n');
            current += 1;
        }
        push_line(&mut out, text);
    }

    out
}

/// Drops line `line`. `None` when the scan ends before reaching it.
pub fn remove_line(content: &[u8], line: usize) -> Option<SectorBuffer> {
    let mut out = SectorBuffer::new();
    let mut current = 1;
    let mut pos = 0;
    let mut found = false;

    while pos < content.len() && out.len() < COPY_LIMIT {
        if current == line {
            found = true;
            pos = skip_line(content, pos);
            current += 1;
        } else {
            if content[pos] == b'\n' {
                current += 1;
            }
            out.push(content[pos]);
            pos += 1;
        }
    }

    found.then_some(out)
}

/// Opens a blank line at `line`, pushing the old line `line` down
pub fn open_line(content: &[u8], line: usize) -> SectorBuffer {
    let mut out = SectorBuffer::new();
    let mut current = 1;
    let mut pos = 0;
    let mut inserted = false;

    while pos < content.len() && out.len() < PAD_LIMIT {
        if current == line && !inserted {
            // Source position stays put
            out.push(b'\n');
            inserted = true;
            current += 1;
        } else {
            if content[pos] == b'\n' {
                current += 1;
            }
            out.push(content[pos]);
            pos += 1;
        }
    }

    if !inserted {
        while current < line && out.len() < PAD_LIMIT {
            out.push(b'\n');
            current += 1;
        }
        out.push(b'\n');
    }

    out
}

/// Current content of `name`, or `None` when it does not exist yet
fn existing(fs: &Fat16, name: &str) -> Result<Option<SectorBuffer>, FsError> {
    match fs.read(name) {
        Ok(data) => Ok(Some(data.bytes().iter().copied().collect())),
        Err(FsError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

fn check_line(line: usize) -> Result<(), FsError> {
    if line == 0 {
        return Err(FsError::InvalidLine);
    }
    Ok(())
}

/// Replaces line `line` of `name` with `text`, creating the file if needed
pub fn edit_line(fs: &mut Fat16, name: &str, line: usize, text: &str) -> Result<(), FsError> {
    check_line(line)?;
    let old = existing(fs, name)?.unwrap_or_default();
    let new = replace_line(&old, line, text.as_bytes());
    log::debug!("edit '{}' line {}: {} -> {} bytes", name, line, old.len(), new.len());
    fs.write(name, &new)
}

/// Removes line `line` from `name`
pub fn delete_line(fs: &mut Fat16, name: &str, line: usize) -> Result<(), FsError> {
    check_line(line)?;
    let old = existing(fs, name)?.ok_or(FsError::NotFound)?;
    let new = remove_line(&old, line).ok_or(FsError::LineNotPresent)?;
    fs.write(name, &new)
}

/// Inserts a blank line at `line` of `name`, creating the file if needed
pub fn insert_line(fs: &mut Fat16, name: &str, line: usize) -> Result<(), FsError> {
    check_line(line)?;
    let old = existing(fs, name)?.unwrap_or_default();
    let new = open_line(&old, line);
    fs.write(name, &new)
}
