//! Backend trait shared by every logger implementation

use super::{
    detail::Detail, error::Result, log_level::Level, record::TracingContext, sink::Sink,
};
use std::sync::Arc;

/// Called by `fatal` after the line is written. The default handler exits
/// the process; tests install one that records the code instead.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Exit status used by `fatal`
pub const FATAL_EXIT_CODE: i32 = 1;

/// Handler that terminates the process.
pub fn process_exit() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

pub trait Backend: Send + Sync {
    /// Write at `level` unless the threshold suppresses it. `Fatal` goes
    /// through [`Backend::fatal`] and `Unknown` is dropped.
    fn log(&self, level: Level, msg: &str, details: &[Detail]);

    /// Write at fatal severity, never suppressed, then terminate the process
    /// with status 1.
    fn fatal(&self, msg: &str, details: &[Detail]);

    fn error(&self, msg: &str, details: &[Detail]) {
        self.log(Level::Error, msg, details);
    }

    fn warning(&self, msg: &str, details: &[Detail]) {
        self.log(Level::Warning, msg, details);
    }

    fn success(&self, msg: &str, details: &[Detail]) {
        self.log(Level::Success, msg, details);
    }

    fn info(&self, msg: &str, details: &[Detail]) {
        self.log(Level::Info, msg, details);
    }

    fn debug(&self, msg: &str, details: &[Detail]) {
        self.log(Level::Debug, msg, details);
    }

    /// Change the threshold. An unknown name leaves the current one in place.
    fn set_level(&self, level: &str) -> Result<()>;

    fn get_level(&self) -> String;

    fn set_writer(&self, sink: Sink);

    fn get_writer(&self) -> Option<Sink>;

    /// A backend whose records carry `ctx`. Backends without trace
    /// correlation return themselves.
    fn with_context(self: Arc<Self>, ctx: &TracingContext) -> Arc<dyn Backend>;

    /// Identifier used for selection
    fn name(&self) -> &str;

    fn start_spinner(&self, msg: &str, details: &[Detail]);

    fn stop_success(&self, msg: &str, details: &[Detail]);

    fn stop_error(&self, msg: &str, details: &[Detail]);
}
