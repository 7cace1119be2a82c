//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They log without
//! details; call the backend methods directly to attach [`crate::Detail`]s.
//!
//! # Examples
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::info;
//!
//! let logger = NoneBackend::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = NoneBackend::new();
/// use rust_logger_facade::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        {
            use $crate::Backend as _;
            $logger.log($level, &format!($($arg)+), &[])
        }
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = NoneBackend::new();
/// use rust_logger_facade::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a success-level message.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Success, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = NoneBackend::new();
/// use rust_logger_facade::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message and terminate the process.
///
/// # Examples
///
/// ```no_run
/// # use rust_logger_facade::prelude::*;
/// use rust_logger_facade::fatal;
/// let logger = PrettyBackend::new();
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::Backend as _;
            $logger.fatal(&format!($($arg)+), &[])
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::backends::IconBackend;
    use crate::core::{Level, MemorySink, Sink, FATAL_EXIT_CODE};
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_leveled_macros() {
        let memory = MemorySink::new();
        let logger = IconBackend::with_sink(Sink::from(memory.clone())).with_level(Level::Debug);

        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        success!(logger, "Done");
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        assert_eq!(
            memory.writes(),
            vec![
                "🐞  Count: 5\n",
                "ℹ️ Items: 100\n",
                "✅  Done\n",
                " ❗ Retry 1 of 3\n",
                "❌  Code: 500\n",
            ]
        );
    }

    #[test]
    fn test_macros_accept_shared_backends() {
        let memory = MemorySink::new();
        let logger: Arc<dyn crate::Backend> =
            Arc::new(IconBackend::with_sink(Sink::from(memory.clone())));

        log!(logger, Level::Info, "Formatted: {}", 42);
        assert_eq!(memory.contents(), "ℹ️ Formatted: 42\n");
    }

    #[test]
    fn test_log_macro_at_fatal_calls_exit_handler() {
        let code = Arc::new(AtomicI32::new(0));
        let seen = Arc::clone(&code);
        let memory = MemorySink::new();
        let logger = IconBackend::with_sink(Sink::from(memory.clone()))
            .with_exit_handler(Arc::new(move |c| seen.store(c, Ordering::SeqCst)));

        log!(logger, Level::Fatal, "via macro {}", 1);

        assert_eq!(code.load(Ordering::SeqCst), FATAL_EXIT_CODE);
        assert_eq!(memory.contents(), "❌  via macro 1\n");
    }

    #[test]
    fn test_fatal_macro_calls_exit_handler() {
        let code = Arc::new(AtomicI32::new(0));
        let seen = Arc::clone(&code);
        let logger = IconBackend::with_sink(Sink::from(MemorySink::new()))
            .with_exit_handler(Arc::new(move |c| seen.store(c, Ordering::SeqCst)));

        fatal!(logger, "disk {}", "full");
        assert_eq!(code.load(Ordering::SeqCst), FATAL_EXIT_CODE);
    }
}
