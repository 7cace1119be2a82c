//! # Rust Logger Facade
//!
//! A small logging facade with interchangeable backends, selected by name at
//! runtime.
//!
//! ## Features
//!
//! - **Pluggable Backends**: colorful, icon, JSON lines and a silent backend
//! - **Runtime Selection**: pick a backend by name or from `KS_LOGGER_NAME`
//! - **Spinners**: progress indicators that step aside for log lines
//! - **Thread Safe**: one backend can be shared freely across threads
//!
//! ## Example
//!
//! ```no_run
//! use rust_logger_facade::{init_logger, logger, Detail};
//!
//! init_logger("icon");
//! let log = logger();
//! log.info("service ready", &[Detail::int("port", 8080)]);
//!
//! log.start_spinner("syncing", &[]);
//! log.stop_success("synced", &[Detail::int("files", 12)]);
//! ```

pub mod backends;
pub mod core;
pub mod macros;
pub mod registry;
pub mod telemetry;

pub mod prelude {
    pub use crate::backends::{
        ConsoleBackend, ConsoleStyle, IconBackend, NoneBackend, PrettyBackend, StructuredBackend,
    };
    pub use crate::core::{
        Backend, Detail, DetailValue, Level, LoggerConfig, LoggerError, MemorySink, Result, Sink,
        TracingContext,
    };
    pub use crate::registry::{init_default_logger, init_logger, list_logger_names, logger};
}

pub use crate::backends::{
    disable_color, enable_color, ConsoleBackend, ConsoleStyle, IconBackend, IconStyle,
    NoneBackend, PrettyBackend, PrettyStyle, StructuredBackend,
};
pub use crate::core::{
    details_to_string, format_message, process_exit, Backend, Detail, DetailValue, ExitHandler,
    Level, LoggerConfig, LoggerError, MemorySink, Record, Result, Sink, SpinnerController,
    SpinnerState, TracingContext, ENV_LOGGER_LEVEL, ENV_LOGGER_NAME, FATAL_EXIT_CODE,
};
pub use crate::registry::{
    global, init_default_logger, init_logger, list_logger_names, logger, BackendKind, Registry,
};
