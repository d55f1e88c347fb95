//! Line-oriented text writer.

use chrono::{Local, NaiveDateTime, Utc};
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::{self, Write};

use super::Flags;

/// Writes one line per record to a byte sink, optionally preceded by a
/// prefix and a timestamp header.
///
/// Each line is assembled in memory and handed to the sink with a single
/// `write_all` while holding the sink lock, so lines written from
/// different threads never interleave.
pub struct LineWriter {
    sink: Mutex<Box<dyn Write + Send>>,
    prefix: String,
    flags: Flags,
}

impl LineWriter {
    /// Create a writer over `sink`.
    pub fn new<W>(sink: W, prefix: impl Into<String>, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            sink: Mutex::new(Box::new(sink)),
            prefix: prefix.into(),
            flags,
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Write `message` as a single line, appending a newline if it lacks one.
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let line = self.render(self.now(), message);
        let mut sink = self.sink.lock();
        sink.write_all(line.as_bytes())?;
        sink.flush()
    }

    fn now(&self) -> NaiveDateTime {
        if self.flags.contains(Flags::UTC) {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }

    fn render(&self, at: NaiveDateTime, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + 27 + message.len() + 1);
        self.write_header(&mut line, at);
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn write_header(&self, buf: &mut String, at: NaiveDateTime) {
        if !self.flags.contains(Flags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }
        if self.flags.contains(Flags::DATE) {
            let _ = write!(buf, "{} ", at.format("%Y/%m/%d"));
        }
        if self.flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", at.format("%H:%M:%S"));
            if self.flags.contains(Flags::MICROSECONDS) {
                let _ = write!(buf, "{}", at.format("%.6f"));
            }
            buf.push(' ');
        }
        if self.flags.contains(Flags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }
    }
}

impl std::fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineWriter")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
