//! JSON lines backend for log aggregation
//!
//! Each record is a single-line JSON object (JSONL format) compatible with
//! collectors like ELK or Loki:
//!
//! ```text
//! {"level":"warn","ts":"2024-05-01T10:00:00Z","msg":"careful","code":42}
//! ```
//!
//! Level names follow the common structured-logging vocabulary: `success` is
//! written and gated as `info`, `warning` as `warn`.

use crate::core::{
    process_exit, Backend, Detail, ExitHandler, Level, LoggerError, Record, Result, Sink,
    TracingContext, FATAL_EXIT_CODE,
};
use parking_lot::{Mutex, RwLock};
use std::path::Path;
use std::sync::Arc;

pub const NAME: &str = "structured";

/// Name written in the `level` field
fn wire_name(level: Level) -> &'static str {
    match level {
        Level::Debug => "debug",
        Level::Info | Level::Success => "info",
        Level::Warning => "warn",
        Level::Error => "error",
        Level::Fatal => "fatal",
        Level::Unknown => "unknown",
    }
}

fn effective(level: Level) -> Level {
    match level {
        Level::Success => Level::Info,
        other => other,
    }
}

/// State shared between a backend and every context-bound child
struct Shared {
    level: RwLock<Level>,
    sink: Mutex<Sink>,
}

pub struct StructuredBackend {
    shared: Arc<Shared>,
    exit: ExitHandler,
    tracing: Option<TracingContext>,
}

impl StructuredBackend {
    /// Writes to stderr at the `info` threshold.
    pub fn new() -> Self {
        Self::with_sink(Sink::Stderr)
    }

    /// The destination is fixed for the lifetime of the backend.
    pub fn with_sink(sink: Sink) -> Self {
        Self {
            shared: Arc::new(Shared {
                level: RwLock::new(Level::Info),
                sink: Mutex::new(sink),
            }),
            exit: process_exit(),
            tracing: None,
        }
    }

    /// Append records to the file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_sink(Sink::file(path)?))
    }

    /// Replace what `fatal` does after writing its record.
    #[must_use = "builder methods return a new value"]
    pub fn with_exit_handler(mut self, exit: ExitHandler) -> Self {
        self.exit = exit;
        self
    }

    pub fn tracing(&self) -> Option<&TracingContext> {
        self.tracing.as_ref()
    }

    fn write(&self, level: Level, msg: &str, details: &[Detail]) {
        let record =
            Record::new(wire_name(level), msg, details).with_tracing(self.tracing.as_ref());
        let line = match record.to_json() {
            Ok(json) => json + "\n",
            Err(e) => {
                eprintln!("[LOGGER ERROR] Failed to encode record: {}", e);
                return;
            }
        };
        self.shared.sink.lock().emit(line.as_bytes());
    }
}

impl Default for StructuredBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for StructuredBackend {
    fn log(&self, level: Level, msg: &str, details: &[Detail]) {
        match level {
            Level::Fatal => self.fatal(msg, details),
            Level::Unknown => {}
            _ => {
                let threshold = effective(*self.shared.level.read());
                if !effective(level).should_skip(threshold) {
                    self.write(level, msg, details);
                }
            }
        }
    }

    fn fatal(&self, msg: &str, details: &[Detail]) {
        self.write(Level::Fatal, msg, details);
        (self.exit)(FATAL_EXIT_CODE);
    }

    /// Accepts every level name plus `warn`.
    fn set_level(&self, level: &str) -> Result<()> {
        let parsed = if level.eq_ignore_ascii_case("warn") {
            Level::Warning
        } else {
            Level::parse(level)
        };
        if parsed.is_unknown() {
            return Err(LoggerError::unknown_level(level));
        }
        *self.shared.level.write() = parsed;
        Ok(())
    }

    fn get_level(&self) -> String {
        wire_name(*self.shared.level.read()).to_string()
    }

    fn set_writer(&self, _sink: Sink) {}

    fn get_writer(&self) -> Option<Sink> {
        None
    }

    fn with_context(self: Arc<Self>, ctx: &TracingContext) -> Arc<dyn Backend> {
        if self.tracing.is_some() {
            return self;
        }
        Arc::new(StructuredBackend {
            shared: Arc::clone(&self.shared),
            exit: Arc::clone(&self.exit),
            tracing: Some(ctx.clone()),
        })
    }

    fn name(&self) -> &str {
        NAME
    }

    fn start_spinner(&self, msg: &str, details: &[Detail]) {
        self.log(Level::Info, msg, details);
    }

    fn stop_success(&self, msg: &str, details: &[Detail]) {
        self.log(Level::Info, msg, details);
    }

    fn stop_error(&self, msg: &str, details: &[Detail]) {
        self.log(Level::Error, msg, details);
    }
}
