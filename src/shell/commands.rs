//! Command table and the handlers behind it.
//!
//! Every command is one [`Command`] record in [`COMMAND_LIST`]; the lookup
//! map adds aliases on top. Help, `man` and `which` are all driven from the
//! same records.

use super::error::ShellError;
use super::terminal::Terminal;
use super::{leading_int, split_command, Shell};
use crate::constants::shell::*;
use crate::devices::Key;
use crate::filesys::FsError;
use crate::inspect::{self, FileKind};
use crate::{editor, term_print, term_println};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use arrayvec::ArrayVec;
use lazy_static::lazy_static;

pub type CommandResult = Result<(), ShellError>;

/// Receives the raw argument text after the command name, `None` when blank
pub type Handler = fn(&mut Shell, Option<&str>, &mut Terminal<'_>) -> CommandResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Files,
    Editing,
    Inspection,
    Text,
    System,
}

impl Category {
    /// Help page order
    pub const ALL: [Category; 5] = [
        Category::Files,
        Category::Editing,
        Category::Inspection,
        Category::Text,
        Category::System,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Files => "FILES AND DIRECTORIES",
            Category::Editing => "TEXT EDITING",
            Category::Inspection => "FILE ANALYSIS",
            Category::Text => "TEXT UTILITIES",
            Category::System => "SYSTEM",
        }
    }
}

#[derive(Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub handler: Handler,
    pub usage: &'static str,
    pub category: Category,
    pub summary: &'static str,
    /// Dispatcher rejects the command with its usage when no argument is given
    pub needs_arg: bool,
    pub manual: Option<&'static [&'static str]>,
}

const CAT_USAGE: &str = "cat <file>";
const CP_USAGE: &str = "cp <src> <dst>";
const MV_USAGE: &str = "mv <old> <new>";
const EDLN_USAGE: &str = "edln <file> <line> <text>";
const DELLN_USAGE: &str = "delln <file> <line>";
const INSLN_USAGE: &str = "insln <file> <line>";
const HEAD_USAGE: &str = "head <file> [n]";
const TAIL_USAGE: &str = "tail <file> [n]";
const GREP_USAGE: &str = "grep <pattern> <file>";

const fn entry(
    name: &'static str,
    handler: Handler,
    usage: &'static str,
    category: Category,
    summary: &'static str,
    needs_arg: bool,
) -> Command {
    Command {
        name,
        aliases: &[],
        handler,
        usage,
        category,
        summary,
        needs_arg,
        manual: None,
    }
}

const fn with_manual(command: Command, manual: &'static [&'static str]) -> Command {
    Command {
        manual: Some(manual),
        ..command
    }
}

const fn with_aliases(command: Command, aliases: &'static [&'static str]) -> Command {
    Command { aliases, ..command }
}

pub static COMMAND_LIST: &[Command] = &[
    with_manual(
        entry("ls", ls, "ls", Category::Files, "List files in the root directory", false),
        &[
            "Usage: ls",
            "Lists every file in the root directory",
            "Shows: file name and size in bytes",
        ],
    ),
    with_manual(
        entry("cat", cat, CAT_USAGE, Category::Files, "Show the contents of a file", true),
        &[
            "Usage: cat <file>",
            "Prints the whole content of a file",
            "Example: cat hello.txt",
        ],
    ),
    entry("touch", touch, "touch <file>", Category::Files, "Create an empty file", true),
    with_aliases(
        entry("cp", cp, CP_USAGE, Category::Files, "Copy a file", true),
        &["copy"],
    ),
    entry("mv", mv, MV_USAGE, Category::Files, "Rename a file", true),
    entry("delete", delete, "delete <file>", Category::Files, "Delete a file", true),
    entry("mkdir", mkdir, "mkdir <dir>", Category::Files, "Create a simulated directory", true),
    entry("pwd", pwd, "pwd", Category::Files, "Show the current directory", false),
    with_manual(
        entry("copycon", copycon, "copycon <file>", Category::Editing, "Create a file from the keyboard", true),
        &[
            "Usage: copycon <file>",
            "Creates a file from what is typed on the keyboard",
            "Finish with: Ctrl+Z or Ctrl+D",
            "Example: copycon test.txt",
        ],
    ),
    with_manual(
        entry("edln", edln, EDLN_USAGE, Category::Editing, "Replace one line of a file", true),
        &[
            "Usage: edln <file> <line> <text>",
            "Replaces or creates one line of a file",
            "Example: edln test.txt 2 new line",
        ],
    ),
    entry("delln", delln, DELLN_USAGE, Category::Editing, "Delete one line of a file", true),
    entry("insln", insln, INSLN_USAGE, Category::Editing, "Insert a blank line", true),
    entry("tee", tee, "tee <file>", Category::Editing, "Write the keyboard to a file and the screen", true),
    with_manual(
        entry("wc", wc, "wc <file>", Category::Inspection, "Count lines, words and characters", true),
        &[
            "Usage: wc <file>",
            "Counts lines, words and characters",
            "Output: lines words characters file",
        ],
    ),
    with_manual(
        entry("head", head, HEAD_USAGE, Category::Inspection, "Show the first n lines (default 10)", true),
        &[
            "Usage: head <file> [lines]",
            "Shows the first lines of a file",
            "Default: 10 lines",
            "Example: head test.txt 5",
        ],
    ),
    with_manual(
        entry("tail", tail, TAIL_USAGE, Category::Inspection, "Show the last n lines (default 10)", true),
        &[
            "Usage: tail <file> [lines]",
            "Shows the last lines of a file",
            "Default: 10 lines",
            "Example: tail test.txt 3",
        ],
    ),
    with_manual(
        entry("grep", grep, GREP_USAGE, Category::Inspection, "Search a file for text", true),
        &[
            "Usage: grep <pattern> <file>",
            "Prints the numbered lines of a file that contain a pattern",
            "Example: grep hello test.txt",
        ],
    ),
    with_manual(
        entry("hexdump", hexdump, "hexdump <file>", Category::Inspection, "Show a file in hexadecimal", true),
        &[
            "Usage: hexdump <file>",
            "Shows the content of a file in hexadecimal",
            "Includes: offset, hex bytes and ASCII rendering",
        ],
    ),
    entry("file", file, "file <file>", Category::Inspection, "Determine the file type", true),
    entry("stat", stat, "stat <file>", Category::Inspection, "Show file details", true),
    entry("du", du, "du <file>", Category::Inspection, "Show disk usage in sectors", true),
    entry("echo", echo, "echo <text>", Category::Text, "Print text", true),
    entry("rev", rev, "rev <text>", Category::Text, "Reverse text", true),
    entry("yes", yes, "yes <text>", Category::Text, "Repeat text (limited)", true),
    entry("sort", sort, "sort <file>", Category::Text, "Sort file contents (simulated)", true),
    entry("uniq", uniq, "uniq <file>", Category::Text, "Unique lines (simulated)", true),
    entry("which", which, "which <cmd>", Category::Text, "Locate a command", true),
    entry("basename", basename, "basename <path>", Category::Text, "Strip the directory part", true),
    entry("dirname", dirname, "dirname <path>", Category::Text, "Strip the file part", true),
    entry("whoami", whoami, "whoami", Category::System, "Show the current user", false),
    entry("uname", uname, "uname", Category::System, "System information", false),
    entry("date", date, "date", Category::System, "Current date", false),
    entry("cal", cal, "cal", Category::System, "Calendar", false),
    entry("uptime", uptime, "uptime", Category::System, "Time running", false),
    entry("free", free, "free", Category::System, "Volume and memory usage", false),
    with_manual(
        entry("history", history, "history", Category::System, "Command history", false),
        &[
            "Usage: history",
            "Shows the last commands entered",
            "Navigation: up/down arrows at the prompt",
        ],
    ),
    entry("man", man, "man <cmd>", Category::System, "Manual page of a command", true),
    with_aliases(
        entry("clear", clear, "clear", Category::System, "Clear the screen", false),
        &["cls"],
    ),
    with_aliases(
        entry("help", help, "help", Category::System, "Show this help", false),
        &["?"],
    ),
];

lazy_static! {
    static ref COMMANDS: BTreeMap<&'static str, &'static Command> = {
        let mut table = BTreeMap::new();
        for command in COMMAND_LIST {
            table.insert(command.name, command);
            for &alias in command.aliases {
                table.insert(alias, command);
            }
        }
        table
    };
}

/// Resolves a command name or alias
pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.get(name).copied()
}

fn file_error(name: &str) -> impl FnOnce(FsError) -> ShellError + '_ {
    move |err| ShellError::from_fs(err, name)
}

/// Splits `a b` at the first space; both halves must be present
fn two_args<'a>(arg: Option<&'a str>, usage: &'static str) -> Result<(&'a str, &'a str), ShellError> {
    arg.and_then(|text| text.split_once(' '))
        .filter(|(first, second)| !first.is_empty() && !second.is_empty())
        .ok_or(ShellError::BadArguments { usage })
}

/// Line numbers start at 1
fn parse_line(text: &str) -> Result<usize, ShellError> {
    match leading_int(text) {
        line if line >= 1 => Ok(line as usize),
        _ => Err(ShellError::InvalidNumber(text.into())),
    }
}

/// Optional line count; anything below 1 means the default
fn parse_count(text: Option<&str>) -> usize {
    text.map(leading_int)
        .filter(|&count| count >= 1)
        .map_or(DEFAULT_LINES, |count| count as usize)
}

fn ls(shell: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    for (_, entry) in shell.fs.entries()? {
        term_println!(term, "{}  {} bytes", entry.padded_name(), entry.size);
    }
    Ok(())
}

fn cat(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    let data = shell.fs.read(name).map_err(file_error(name))?;
    term.put_bytes(data.bytes());
    Ok(())
}

fn touch(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    shell.fs.touch(name).map_err(file_error(name))?;
    term_println!(term, "File created: {}", name);
    Ok(())
}

fn cp(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let (source, target) = two_args(arg, CP_USAGE)?;
    let data = shell.fs.read(source).map_err(file_error(source))?;
    shell
        .fs
        .write(target, data.bytes())
        .map_err(file_error(target))?;
    term_println!(term, "File copied: {} -> {}", source, target);
    Ok(())
}

fn mv(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let (old, new) = two_args(arg, MV_USAGE)?;
    if !shell.fs.rename(old, new)? {
        return Err(ShellError::NotFound(old.into()));
    }
    term_println!(term, "File renamed: {} -> {}", old, new);
    Ok(())
}

fn delete(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    shell.fs.tombstone(name).map_err(file_error(name))?;
    term_println!(term, "File deleted: {}", name);
    Ok(())
}

fn mkdir(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name: String = arg.unwrap_or_default().chars().take(DIR_NAME_MAX).collect();
    let directory = format!("[{}]", name);
    shell.fs.touch(&directory).map_err(file_error(&directory))?;
    shell
        .fs
        .write(&directory, directory.as_bytes())
        .map_err(file_error(&directory))?;
    term_println!(term, "Simulated directory created: {}", directory);
    Ok(())
}

fn pwd(_: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, "{}", CURRENT_DIR);
    Ok(())
}

fn copycon(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    term_println!(term, "Type the file contents (Ctrl+Z or Ctrl+D to finish):");

    let mut content = ArrayVec::<u8, COPYCON_LIMIT>::new();
    loop {
        match Key::from(term.read_key()) {
            Key::Ctrl(letter @ (b'Z' | b'D')) => {
                term_println!(term, "^{}", letter as char);
                break;
            }
            _ if content.is_full() => break,
            Key::Backspace | Key::Delete => {
                if content.pop().is_some() {
                    term.put_bytes(b"\x08 \x08");
                }
            }
            Key::Enter => {
                content.push(b'\n');
                term.put_char(b'\n');
            }
            Key::Char(byte) => {
                content.push(byte);
                term.put_char(byte);
            }
            _ => {}
        }
    }

    shell.fs.write(name, &content).map_err(file_error(name))?;
    term_println!(term, "File created: {} ({} bytes)", name, content.len());
    Ok(())
}

fn edln(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let usage = ShellError::BadArguments { usage: EDLN_USAGE };
    let (name, rest) = two_args(arg, EDLN_USAGE)?;
    let (number, text) = rest
        .split_once(' ')
        .filter(|(_, text)| !text.is_empty())
        .ok_or(usage)?;
    let line = parse_line(number)?;

    term_println!(term, "Editing file: {}, line: {}, text: {}", name, line, text);
    editor::edit_line(&mut shell.fs, name, line, text).map_err(file_error(name))?;
    term_println!(term, "Line {} edited in file: {}", line, name);
    Ok(())
}

fn delln(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let (name, number) = two_args(arg, DELLN_USAGE)?;
    let line = parse_line(number)?;

    editor::delete_line(&mut shell.fs, name, line).map_err(|err| match err {
        FsError::LineNotPresent => ShellError::LineNotPresent {
            name: name.into(),
            line,
        },
        other => ShellError::from_fs(other, name),
    })?;
    term_println!(term, "Line {} deleted from file: {}", line, name);
    Ok(())
}

fn insln(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let (name, number) = two_args(arg, INSLN_USAGE)?;
    let line = parse_line(number)?;

    editor::insert_line(&mut shell.fs, name, line).map_err(file_error(name))?;
    term_println!(term, "Blank line inserted at position {} of file: {}", line, name);
    Ok(())
}

fn tee(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    term_println!(term, "Type text (Ctrl+D to finish):");

    let mut content = ArrayVec::<u8, TEE_LIMIT>::new();
    while !content.is_full() {
        let byte = match Key::from(term.read_key()) {
            Key::Ctrl(b'D') => break,
            Key::Enter => b'\n',
            Key::Char(byte) => byte,
            _ => continue,
        };
        content.push(byte);
        term.put_char(byte);
    }

    shell.fs.write(name, &content).map_err(file_error(name))?;
    term_println!(term, "\nText saved to: {}", name);
    Ok(())
}

fn wc(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    let data = shell.fs.read(name).map_err(file_error(name))?;
    let count = inspect::word_count(data.bytes());
    term_println!(term, "{} {} {} {}", count.lines, count.words, count.chars, name);
    Ok(())
}

fn head(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let (name, count) = split_command(arg.unwrap_or_default());
    let data = shell.fs.read(name).map_err(file_error(name))?;
    term.put_bytes(inspect::head(data.bytes(), parse_count(count)));
    Ok(())
}

fn tail(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let (name, count) = split_command(arg.unwrap_or_default());
    let data = shell.fs.read(name).map_err(file_error(name))?;
    term.put_bytes(inspect::tail(data.bytes(), parse_count(count)));
    Ok(())
}

fn grep(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let (pattern, name) = two_args(arg, GREP_USAGE)?;
    let data = shell.fs.read(name).map_err(file_error(name))?;

    let mut matches = 0;
    for (number, line) in inspect::grep(pattern.as_bytes(), data.bytes()) {
        term_print!(term, "{}: ", number);
        term.put_bytes(line);
        term.put_char(b'\n');
        matches += 1;
    }

    if matches == 0 {
        term_println!(term, "pattern '{}' not found in {}", pattern, name);
    }
    Ok(())
}

fn hexdump(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    let data = shell.fs.read(name).map_err(file_error(name))?;
    term_println!(term, "=== HEXDUMP of {} ({} bytes) ===", name, data.size());
    // Writing to a console cannot fail
    let _ = inspect::hexdump(data.bytes(), term);
    Ok(())
}

fn file(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    let data = shell.fs.read(name).map_err(file_error(name))?;
    term_println!(term, "{}: {}", name, inspect::file_kind(data.bytes()).describe());
    Ok(())
}

fn stat(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    let (entry, slot) = shell.fs.find(name).map_err(file_error(name))?;
    let data = shell.fs.read(name).map_err(file_error(name))?;
    let kind = match inspect::file_kind(data.bytes()) {
        FileKind::SimulatedDirectory => "simulated directory",
        _ => "regular file",
    };

    term_println!(term, "File: {}", name);
    term_println!(term, "Size: {} bytes", entry.size);
    term_println!(term, "Cluster: {}", entry.first_cluster);
    term_println!(term, "Slot: {}", slot);
    term_println!(term, "Type: {}", kind);
    Ok(())
}

fn du(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    match shell.fs.read(name) {
        Ok(data) => {
            term_println!(term, "{}\t{}", inspect::disk_usage_sectors(data.size()), name);
        }
        Err(FsError::NotFound) => term_println!(term, "0\t{} (not found)", name),
        Err(err) => return Err(ShellError::from_fs(err, name)),
    }
    Ok(())
}

fn echo(_: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, "{}", arg.unwrap_or_default());
    Ok(())
}

fn rev(_: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    for byte in arg.unwrap_or_default().bytes().rev() {
        term.put_char(byte);
    }
    term.put_char(b'\n');
    Ok(())
}

fn yes(_: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let text = arg.unwrap_or_default();
    for _ in 0..YES_REPEAT {
        term_println!(term, "{}", text);
    }
    term_println!(term, "(limited to {} repetitions)", YES_REPEAT);
    Ok(())
}

fn sort(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    let data = shell.fs.read(name).map_err(file_error(name))?;
    term_println!(term, "Contents of {} (simulated sort):", name);
    term.put_bytes(data.bytes());
    Ok(())
}

fn uniq(shell: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    let data = shell.fs.read(name).map_err(file_error(name))?;
    term_println!(term, "Simulated uniq for: {}", name);
    term.put_bytes(inspect::tail(data.bytes(), UNIQ_LINES));
    Ok(())
}

fn which(_: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    match lookup(name) {
        Some(command) => term_println!(term, "/bin/{}", command.name),
        None => term_println!(term, "{}: command not found", name),
    }
    Ok(())
}

fn basename(_: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    // Single flat directory: the name is already its own base
    term_println!(term, "{}", arg.unwrap_or_default());
    Ok(())
}

fn dirname(_: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, ".");
    Ok(())
}

fn whoami(_: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, "{}", USER_NAME);
    Ok(())
}

fn uname(_: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, "{}", SYSTEM_NAME);
    Ok(())
}

fn date(_: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, "{}", FIXED_DATE);
    Ok(())
}

fn cal(_: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, "   December 2024");
    term_println!(term, "Su Mo Tu We Th Fr Sa");
    term_println!(term, " 1  2  3  4  5  6  7");
    term_println!(term, " 8  9 10 11 12 13 14");
    term_println!(term, "15 16 17 18 19 20 21");
    term_println!(term, "22 23 24 25 26 27 28");
    term_println!(term, "29 30 31");
    Ok(())
}

fn uptime(shell: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(
        term,
        "system running, {} commands entered",
        shell.history.count()
    );
    Ok(())
}

fn free(shell: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    let usage = shell.fs.usage()?;
    term_println!(term, "RAM disk:        {} KB", usage.image_bytes / 1024);
    term_println!(
        term,
        "Clusters:        {} used / {} total",
        usage.used_clusters,
        usage.total_clusters
    );
    term_println!(
        term,
        "Directory slots: {} used / {} total",
        usage.used_slots,
        usage.total_slots
    );
    term_println!(term, "Files:           {}", usage.live_files);
    Ok(())
}

fn history(shell: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, "=== COMMAND HISTORY ===");
    if shell.history.count() == 0 {
        term_println!(term, "No commands in history.");
        return Ok(());
    }

    term_println!(term, "Total commands: {}", shell.history.count());
    for (number, command) in shell.history.iter() {
        term_println!(term, "{:2}: {}", number, command);
    }
    Ok(())
}

fn man(_: &mut Shell, arg: Option<&str>, term: &mut Terminal) -> CommandResult {
    let name = arg.unwrap_or_default();
    match lookup(name).and_then(|command| Some((command.name, command.manual?))) {
        Some((name, manual)) => {
            term_println!(term, "MANUAL: {}", name);
            for line in manual {
                term_println!(term, "{}", line);
            }
        }
        None => {
            let documented: Vec<&str> = COMMAND_LIST
                .iter()
                .filter(|command| command.manual.is_some())
                .map(|command| command.name)
                .collect();
            term_println!(term, "man: no manual entry for '{}'", name);
            term_println!(term, "Commands with manuals: {}", documented.join(", "));
        }
    }
    Ok(())
}

fn clear(_: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term.clear();
    Ok(())
}

fn help_label(command: &Command) -> String {
    let mut label = String::from(command.usage);
    for alias in command.aliases {
        label.push('/');
        label.push_str(alias);
    }
    label
}

/// One page per category, waiting for a key after each
fn help(_: &mut Shell, _: Option<&str>, term: &mut Terminal) -> CommandResult {
    term_println!(term, "=== FATSHELL - AVAILABLE COMMANDS ===");
    for (page, category) in Category::ALL.iter().enumerate() {
        if page > 0 {
            term_println!(term);
        }
        term_println!(term, "=== {} ===", category.title());
        for command in COMMAND_LIST.iter().filter(|c| c.category == *category) {
            term_println!(term, "{:<26}- {}", help_label(command), command.summary);
        }

        let last = page + 1 == Category::ALL.len();
        term_print!(
            term,
            "\n--- Press any key to {} ---",
            if last { "finish" } else { "continue" }
        );
        term.read_key();
    }

    term_println!(term);
    term_println!(term, "Keys: arrows move the cursor and recall history, backspace and delete edit");
    term_println!(term, "Pipes: one producer and one consumer, e.g. cat notes | grep todo");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_resolves_aliases() {
        assert_eq!(lookup("copy").map(|c| c.name), Some("cp"));
        assert_eq!(lookup("cls").map(|c| c.name), Some("clear"));
        assert_eq!(lookup("?").map(|c| c.name), Some("help"));
        assert!(lookup("frobnicate").is_none());
    }

    #[test]
    fn test_every_category_has_commands() {
        for category in Category::ALL {
            assert!(COMMAND_LIST.iter().any(|c| c.category == category));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = COMMAND_LIST
            .iter()
            .flat_map(|c| core::iter::once(c.name).chain(c.aliases.iter().copied()))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_argument_helpers() {
        assert_eq!(two_args(Some("a b c"), CP_USAGE), Ok(("a", "b c")));
        assert_eq!(
            two_args(Some("a"), CP_USAGE),
            Err(ShellError::BadArguments { usage: CP_USAGE })
        );
        assert_eq!(parse_line("3"), Ok(3));
        assert_eq!(parse_line("2x"), Ok(2));
        assert_eq!(parse_line("-1"), Err(ShellError::InvalidNumber("-1".into())));
        assert_eq!(parse_line("0"), Err(ShellError::InvalidNumber("0".into())));
        assert_eq!(parse_line("x"), Err(ShellError::InvalidNumber("x".into())));
        assert_eq!(parse_count(Some("4")), 4);
        assert_eq!(parse_count(Some(" 4 lines")), 4);
        assert_eq!(parse_count(Some("0")), DEFAULT_LINES);
        assert_eq!(parse_count(None), DEFAULT_LINES);
    }
}
