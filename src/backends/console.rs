//! Human-readable terminal backend shared by the pretty and icon variants
//!
//! A [`ConsoleBackend`] owns its sink, threshold and spinner behind one mutex.
//! The variants differ only in their [`ConsoleStyle`], which maps a level to a
//! symbol and renders the final line.

use crate::core::{
    format_message, process_exit, Backend, Detail, ExitHandler, Level, LoggerError, Result, Sink,
    SpinnerController, SpinnerState, TracingContext, FATAL_EXIT_CODE,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Presentation of a console variant
pub trait ConsoleStyle: Default + Send + Sync + 'static {
    /// Backend name used for selection
    const NAME: &'static str;

    /// Fixed prefix drawn before each line.
    fn symbol(&self, level: Level) -> &'static str;

    /// A complete, newline-terminated log line.
    fn render(&self, level: Level, message: &str) -> String {
        format!("{}{}\n", self.symbol(level), message)
    }
}

struct ConsoleState {
    sink: Sink,
    level: Level,
    spinner: SpinnerController,
}

pub struct ConsoleBackend<S: ConsoleStyle> {
    style: S,
    state: Mutex<ConsoleState>,
    exit: ExitHandler,
}

impl<S: ConsoleStyle> ConsoleBackend<S> {
    /// Writes to stderr at the `info` threshold.
    pub fn new() -> Self {
        Self::with_sink(Sink::Stderr)
    }

    pub fn with_sink(sink: Sink) -> Self {
        Self {
            style: S::default(),
            state: Mutex::new(ConsoleState {
                sink,
                level: Level::Info,
                spinner: SpinnerController::new(),
            }),
            exit: process_exit(),
        }
    }

    /// Set the initial threshold. `Unknown` is ignored.
    #[must_use = "builder methods return a new value"]
    pub fn with_level(self, level: Level) -> Self {
        if !level.is_unknown() {
            self.state.lock().level = level;
        }
        self
    }

    /// Replace what `fatal` does after writing its line.
    #[must_use = "builder methods return a new value"]
    pub fn with_exit_handler(mut self, exit: ExitHandler) -> Self {
        self.exit = exit;
        self
    }

    pub fn level(&self) -> Level {
        self.state.lock().level
    }

    pub fn spinner_state(&self) -> SpinnerState {
        self.state.lock().spinner.state()
    }

    /// Start a spinner drawing on `sink`, which may differ from the log sink.
    pub fn start_spinner_on(&self, sink: &Sink, message: &str) {
        self.state.lock().spinner.start(sink, message);
    }

    pub fn pause_spinner(&self) {
        self.state.lock().spinner.pause();
    }

    pub fn resume_spinner(&self) {
        self.state.lock().spinner.resume();
    }

    /// Stop the spinner, drawing `final_line` in its place.
    pub fn stop_spinner(&self, final_line: &str) {
        self.state.lock().spinner.stop(final_line);
    }

    fn print(&self, level: Level, msg: &str, details: &[Detail]) {
        let mut state = self.state.lock();
        if level != Level::Fatal && level.should_skip(state.level) {
            return;
        }
        let line = self.style.render(level, &format_message(msg, details));

        let ConsoleState { sink, spinner, .. } = &mut *state;
        spinner.pause();
        sink.emit(line.as_bytes());
        spinner.resume();
    }

    fn final_line(&self, level: Level, msg: &str, details: &[Detail]) -> String {
        format!("{}{}\n", self.style.symbol(level), format_message(msg, details))
    }
}

impl<S: ConsoleStyle> Default for ConsoleBackend<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ConsoleStyle> Backend for ConsoleBackend<S> {
    fn log(&self, level: Level, msg: &str, details: &[Detail]) {
        match level {
            Level::Fatal => self.fatal(msg, details),
            Level::Unknown => {}
            _ => self.print(level, msg, details),
        }
    }

    fn fatal(&self, msg: &str, details: &[Detail]) {
        self.print(Level::Fatal, msg, details);
        (self.exit)(FATAL_EXIT_CODE);
    }

    fn set_level(&self, level: &str) -> Result<()> {
        match Level::parse(level) {
            Level::Unknown => Err(LoggerError::unknown_level(level)),
            parsed => {
                self.state.lock().level = parsed;
                Ok(())
            }
        }
    }

    fn get_level(&self) -> String {
        self.level().to_string()
    }

    fn set_writer(&self, sink: Sink) {
        let mut state = self.state.lock();
        state.spinner.retarget(&sink);
        state.sink = sink;
    }

    fn get_writer(&self) -> Option<Sink> {
        Some(self.state.lock().sink.clone())
    }

    fn with_context(self: Arc<Self>, _ctx: &TracingContext) -> Arc<dyn Backend> {
        self
    }

    fn name(&self) -> &str {
        S::NAME
    }

    fn start_spinner(&self, msg: &str, details: &[Detail]) {
        let message = format_message(msg, details);
        let mut state = self.state.lock();
        let sink = state.sink.clone();
        state.spinner.start(&sink, &message);
    }

    fn stop_success(&self, msg: &str, details: &[Detail]) {
        self.stop_spinner(&self.final_line(Level::Success, msg, details));
    }

    fn stop_error(&self, msg: &str, details: &[Detail]) {
        self.stop_spinner(&self.final_line(Level::Error, msg, details));
    }
}
