//! Logging facility
//!
//! Backs the `log` facade with a single global logger. The crate has no
//! output device of its own, so records are handed to a sink function the
//! embedder registers (a serial port, stderr, a test buffer).
//! Log levels are configured based on build configuration (debug/release).

use core::fmt;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;

/// Receives one fully formatted record, without a trailing newline
pub type Sink = fn(fmt::Arguments);

/// Global logger instance
pub static LOGGER: Logger = Logger::new();

/// Thread-safe logger implementation
pub struct Logger {
    sink: Mutex<Option<Sink>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Creates a logger with no sink; records are dropped until one is set
    pub const fn new() -> Logger {
        Logger {
            sink: Mutex::new(None),
        }
    }

    pub fn set_sink(&self, sink: Sink) {
        *self.sink.lock() = Some(sink);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    /// Formats messages as "[LEVEL] message"
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let sink = self.sink.lock();
            if let Some(sink) = *sink {
                sink(format_args!("[{}] {}", record.level(), record.args()));
            }
        }
    }

    fn flush(&self) {}
}

/// Level used when the embedder does not pick one
pub fn default_level() -> LevelFilter {
    #[cfg(debug_assertions)]
    {
        LevelFilter::Debug
    }
    #[cfg(not(debug_assertions))]
    {
        LevelFilter::Info
    }
}

/// Installs the global logger with `sink` at the build's default level
///
/// # Errors
/// Fails if a logger was already installed for this process.
pub fn init(sink: Sink) -> Result<(), SetLoggerError> {
    LOGGER.set_sink(sink);
    log::set_logger(&LOGGER).map(|()| log::set_max_level(default_level()))
}

/// Changes the maximum level after `init`
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::fmt::Write;

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn capture(args: fmt::Arguments) {
        let mut line = String::new();
        let _ = line.write_fmt(args);
        CAPTURED.lock().push(line);
    }

    fn emit(logger: &Logger) {
        logger.log(
            &Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("volume {} full", 3))
                .build(),
        );
    }

    #[test]
    fn test_records_reach_sink_with_level_prefix() {
        let logger = Logger::new();
        log::set_max_level(LevelFilter::Trace);

        emit(&logger);
        assert!(CAPTURED.lock().is_empty());

        logger.set_sink(capture);
        emit(&logger);
        assert_eq!(*CAPTURED.lock(), ["[WARN] volume 3 full"]);
    }
}
