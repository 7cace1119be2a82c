//! Core logger types and traits

pub mod backend;
pub mod config;
pub mod detail;
pub mod error;
pub mod log_level;
pub mod record;
pub mod sink;
pub mod spinner;

pub use backend::{process_exit, Backend, ExitHandler, FATAL_EXIT_CODE};
pub use config::{LoggerConfig, ENV_LOGGER_LEVEL, ENV_LOGGER_NAME};
pub use detail::{details_to_string, format_message, Detail, DetailValue};
pub use error::{LoggerError, Result};
pub use log_level::Level;
pub use record::{Record, TracingContext};
pub use sink::{MemorySink, Sink};
pub use spinner::{SpinnerController, SpinnerState};
