//! Output destinations for backends

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::Arc;

/// Where a backend writes its lines.
///
/// Cloning a sink yields a handle to the same destination. Every call to
/// [`Sink::write_all`] is a single write, so one record is never split.
#[derive(Clone, Default)]
pub enum Sink {
    #[default]
    Stderr,
    Stdout,
    File(Arc<Mutex<File>>),
    Memory(MemorySink),
}

impl Sink {
    /// Open `path` for appending, creating it if needed.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log destination",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Sink::File(Arc::new(Mutex::new(file))))
    }

    pub fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stderr => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(buf)?;
                stderr.flush()
            }
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(buf)?;
                stdout.flush()
            }
            Sink::File(file) => file.lock().write_all(buf),
            Sink::Memory(memory) => {
                memory.push(buf);
                Ok(())
            }
        }
    }

    /// Write and report a failure on stderr instead of returning it; a log
    /// call never fails its caller.
    pub(crate) fn emit(&self, buf: &[u8]) {
        if let Err(e) = self.write_all(buf) {
            eprintln!("[LOGGER ERROR] Failed to write to {:?}: {}", self, e);
        }
    }

    /// Whether the destination is an interactive terminal.
    pub fn is_terminal(&self) -> bool {
        match self {
            Sink::Stderr => io::stderr().is_terminal(),
            Sink::Stdout => io::stdout().is_terminal(),
            Sink::File(file) => file.lock().is_terminal(),
            Sink::Memory(memory) => memory.terminal,
        }
    }

    /// True when both handles point at the same destination.
    pub fn same_as(&self, other: &Sink) -> bool {
        match (self, other) {
            (Sink::Stderr, Sink::Stderr) | (Sink::Stdout, Sink::Stdout) => true,
            (Sink::File(a), Sink::File(b)) => Arc::ptr_eq(a, b),
            (Sink::Memory(a), Sink::Memory(b)) => Arc::ptr_eq(&a.writes, &b.writes),
            _ => false,
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stderr => write!(f, "Sink::Stderr"),
            Sink::Stdout => write!(f, "Sink::Stdout"),
            Sink::File(_) => write!(f, "Sink::File"),
            Sink::Memory(m) => write!(f, "Sink::Memory(terminal: {})", m.terminal),
        }
    }
}

impl From<MemorySink> for Sink {
    fn from(memory: MemorySink) -> Self {
        Sink::Memory(memory)
    }
}

/// In-memory capture destination.
///
/// Keeps every write as a separate chunk so callers can check that no write
/// mixed two records. A memory sink can pretend to be a terminal, which lets
/// spinner behaviour be exercised without a tty.
#[derive(Clone, Default)]
pub struct MemorySink {
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
    terminal: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capture buffer that reports itself as a terminal.
    pub fn terminal() -> Self {
        Self {
            writes: Arc::default(),
            terminal: true,
        }
    }

    fn push(&self, buf: &[u8]) {
        self.writes.lock().push(buf.to_vec());
    }

    /// Every write so far, in order, lossily decoded.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .iter()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    /// All bytes written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let writes = self.writes.lock();
        String::from_utf8_lossy(&writes.concat()).into_owned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().len()
    }

    pub fn clear(&self) {
        self.writes.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_sink_records_writes() {
        let memory = MemorySink::new();
        let sink = Sink::from(memory.clone());

        sink.write_all(b"first\n").unwrap();
        sink.write_all(b"second\n").unwrap();

        assert_eq!(memory.writes(), vec!["first\n", "second\n"]);
        assert_eq!(memory.contents(), "first\nsecond\n");
        assert!(!sink.is_terminal());

        memory.clear();
        assert_eq!(memory.write_count(), 0);
    }

    #[test]
    fn test_terminal_memory_sink() {
        let sink = Sink::from(MemorySink::terminal());
        assert!(sink.is_terminal());
    }

    #[test]
    fn test_same_as() {
        let memory = MemorySink::new();
        let a = Sink::from(memory.clone());
        let b = Sink::from(memory);
        assert!(a.same_as(&b));
        assert!(!a.same_as(&Sink::from(MemorySink::new())));
        assert!(Sink::Stderr.same_as(&Sink::Stderr));
        assert!(!Sink::Stderr.same_as(&Sink::Stdout));
    }

    #[test]
    fn test_file_sink() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.log");

        let sink = Sink::file(&path)?;
        sink.write_all(b"line\n")?;
        assert!(!sink.is_terminal());

        assert_eq!(std::fs::read_to_string(&path)?, "line\n");
        Ok(())
    }

    #[test]
    fn test_file_sink_open_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.log");
        let err = Sink::file(&path).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
