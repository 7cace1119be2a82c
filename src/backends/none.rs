//! Backend that prints nothing

use crate::core::{Backend, Detail, Level, LoggerError, Result, Sink, TracingContext};
use std::sync::Arc;

pub const NAME: &str = "none";

/// Discards everything, including `fatal`, which neither prints nor exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoneBackend;

impl NoneBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for NoneBackend {
    fn log(&self, _level: Level, _msg: &str, _details: &[Detail]) {}

    fn fatal(&self, _msg: &str, _details: &[Detail]) {}

    /// Validates the name but stores nothing.
    fn set_level(&self, level: &str) -> Result<()> {
        match Level::parse(level) {
            Level::Unknown => Err(LoggerError::unknown_level(level)),
            _ => Ok(()),
        }
    }

    fn get_level(&self) -> String {
        String::new()
    }

    fn set_writer(&self, _sink: Sink) {}

    fn get_writer(&self) -> Option<Sink> {
        None
    }

    fn with_context(self: Arc<Self>, _ctx: &TracingContext) -> Arc<dyn Backend> {
        self
    }

    fn name(&self) -> &str {
        NAME
    }

    fn start_spinner(&self, _msg: &str, _details: &[Detail]) {}

    fn stop_success(&self, _msg: &str, _details: &[Detail]) {}

    fn stop_error(&self, _msg: &str, _details: &[Detail]) {}
}
