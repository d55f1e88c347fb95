//! Byte sinks for handlers.

use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// In-memory sink whose clones share one buffer.
///
/// Hand one clone to a handler and keep another to read back what was
/// written.
///
/// ```
/// use loft::handler::{Flags, MemorySink, StdHandler};
/// use loft::{DefaultLogger, Logger, LogLevel};
/// use std::sync::Arc;
///
/// let sink = MemorySink::new();
/// let logger = DefaultLogger::new(
///     "app",
///     vec![Arc::new(StdHandler::new(LogLevel::Debug, sink.clone(), Flags::NONE))],
/// );
/// logger.info(&[&"ready"]);
/// assert_eq!(sink.contents(), "app.INFO: ready\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Written lines, without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where a configured handler writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    Stdout,
    Stderr,
    /// Append to a file, creating it if missing.
    File(PathBuf),
}

impl SinkTarget {
    /// Open the target for writing.
    pub fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        match self {
            SinkTarget::Stdout => Ok(Box::new(io::stdout())),
            SinkTarget::Stderr => Ok(Box::new(io::stderr())),
            SinkTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkTarget::Stdout => f.write_str("stdout"),
            SinkTarget::Stderr => f.write_str("stderr"),
            SinkTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// `stdout` and `stderr` select the standard streams; anything else is a file path.
impl FromStr for SinkTarget {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.to_ascii_lowercase().as_str() {
            "stdout" => SinkTarget::Stdout,
            "stderr" => SinkTarget::Stderr,
            _ => SinkTarget::File(PathBuf::from(s)),
        })
    }
}
