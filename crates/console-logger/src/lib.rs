//! Console Logger
//!
//! `tracing` subscriber for browser apps. Formatted events go to the
//! matching `console.*` method and the most recent lines are kept in a
//! circular buffer so the UI can show them.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Default number of lines retained by [`LogBuffer`]
pub const DEFAULT_CAPACITY: usize = 200;

/// Fixed-size buffer of the most recent log lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Lines in insertion order (oldest first)
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

type SharedBuffer = Arc<Mutex<LogBuffer>>;

fn lock(buffer: &SharedBuffer) -> MutexGuard<'_, LogBuffer> {
    // Poisoned lock still holds valid lines
    buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Writer for a single formatted event
pub struct ConsoleWriter {
    level: Level,
    bytes: Vec<u8>,
    buffer: SharedBuffer,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        if self.bytes.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.bytes).trim_end().to_string();
        self.bytes.clear();
        if text.is_empty() {
            return;
        }
        write_console(self.level, &text);
        lock(&self.buffer).push(text);
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, text: &str) {
    let value = wasm_bindgen::JsValue::from_str(text);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, text: &str) {
    eprintln!("{}", text);
}

/// `MakeWriter` that routes each event to the console by level
#[derive(Clone)]
pub struct ConsoleMakeWriter {
    buffer: SharedBuffer,
}

impl ConsoleMakeWriter {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(LogBuffer::new(capacity))),
        }
    }

    pub fn handle(&self) -> LoggerHandle {
        LoggerHandle {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            bytes: Vec::new(),
            buffer: Arc::clone(&self.buffer),
        }
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            bytes: Vec::new(),
            buffer: Arc::clone(&self.buffer),
        }
    }
}

/// Read access to the recent-lines buffer after init
#[derive(Clone)]
pub struct LoggerHandle {
    buffer: SharedBuffer,
}

impl LoggerHandle {
    pub fn recent_lines(&self) -> Vec<String> {
        lock(&self.buffer).lines()
    }

    pub fn clear(&self) {
        lock(&self.buffer).clear();
    }
}

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    pub max_level: LevelFilter,
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_level: if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO },
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: LoggerConfig) -> Result<LoggerHandle, String> {
    let writer = ConsoleMakeWriter::new(config.capacity);
    let handle = writer.handle();

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(config.max_level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = LogBuffer::new(0);
        buffer.push("dropped".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_writer_pushes_trimmed_line_on_drop() {
        let make = ConsoleMakeWriter::new(10);
        let handle = make.handle();
        {
            let mut writer = make.make_writer();
            writeln!(writer, "INFO app: loaded 3 entries").unwrap();
        }
        assert_eq!(handle.recent_lines(), vec!["INFO app: loaded 3 entries"]);

        handle.clear();
        assert!(handle.recent_lines().is_empty());
    }

    #[test]
    fn test_empty_write_is_ignored() {
        let make = ConsoleMakeWriter::new(10);
        let handle = make.handle();
        {
            let mut writer = make.make_writer();
            writer.write_all(b"\n").unwrap();
            writer.flush().unwrap();
        }
        assert!(handle.recent_lines().is_empty());
    }
}
