//! Process-wide backend selection
//!
//! The active backend lives in a [`Registry`]. The crate keeps one global
//! registry behind [`logger`] and [`init_logger`]. Independent registries can
//! be created for tests or embedding.
//!
//! Selection never fails: an unknown or empty name falls back to the pretty
//! backend, so logging setup can not stop an application from starting.

use crate::backends::{icon, none, pretty, structured};
use crate::backends::{IconBackend, NoneBackend, PrettyBackend, StructuredBackend};
use crate::core::{Backend, Detail, LoggerConfig, ENV_LOGGER_LEVEL};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

/// The fixed set of backend variants, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    #[default]
    Pretty,
    Icon,
    Structured,
    None,
}

impl BackendKind {
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Pretty,
        BackendKind::Icon,
        BackendKind::Structured,
        BackendKind::None,
    ];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Pretty => pretty::NAME,
            BackendKind::Icon => icon::NAME,
            BackendKind::Structured => structured::NAME,
            BackendKind::None => none::NAME,
        }
    }

    /// Case-insensitive lookup by canonical name or alias.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pretty" | "colorful" => Some(BackendKind::Pretty),
            "icon" | "emoji" => Some(BackendKind::Icon),
            "structured" | "json" | "zap" => Some(BackendKind::Structured),
            "none" | "mock" | "empty" | "ignore" => Some(BackendKind::None),
            _ => None,
        }
    }

    /// Like [`BackendKind::from_name`] with the pretty fallback.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn build(&self) -> Arc<dyn Backend> {
        match self {
            BackendKind::Pretty => Arc::new(PrettyBackend::new()),
            BackendKind::Icon => Arc::new(IconBackend::new()),
            BackendKind::Structured => Arc::new(StructuredBackend::new()),
            BackendKind::None => Arc::new(NoneBackend::new()),
        }
    }
}

/// Canonical backend names, in declaration order.
pub fn list_names() -> [&'static str; 4] {
    BackendKind::ALL.map(|kind| kind.name())
}

/// Apply the configured threshold. A bad name is reported through the
/// backend itself and the backend default stays.
fn apply_level(backend: &dyn Backend, config: &LoggerConfig) {
    if let Some(level) = config.level.as_deref() {
        if let Err(e) = backend.set_level(level) {
            backend.warning(
                "failed to set logger level",
                &[Detail::string("environment", ENV_LOGGER_LEVEL), Detail::error(&e)],
            );
        }
    }
}

/// Build the backend that `name` (or the configured name when `name` is
/// empty) selects, with the configured threshold applied.
pub fn build_backend(name: &str, config: &LoggerConfig) -> Arc<dyn Backend> {
    let name = if name.is_empty() {
        config.name.as_deref().unwrap_or_default()
    } else {
        name
    };
    let backend = BackendKind::resolve(name).build();
    apply_level(backend.as_ref(), config);
    backend
}

/// Holder of the active backend
#[derive(Default)]
pub struct Registry {
    active: RwLock<Option<Arc<dyn Backend>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select using the process environment.
    pub fn select(&self, name: &str) -> Arc<dyn Backend> {
        self.select_with(name, &LoggerConfig::from_env())
    }

    /// Select with explicit configuration and make the result active.
    pub fn select_with(&self, name: &str, config: &LoggerConfig) -> Arc<dyn Backend> {
        let backend = build_backend(name, config);
        *self.active.write() = Some(Arc::clone(&backend));
        backend
    }

    /// Install an already built backend.
    pub fn install(&self, backend: Arc<dyn Backend>) {
        *self.active.write() = Some(backend);
    }

    /// The active backend, selecting the default from the environment on
    /// first use.
    pub fn active(&self) -> Arc<dyn Backend> {
        self.active_or_init(LoggerConfig::from_env)
    }

    /// Like [`Registry::active`], using `config` if a default must be chosen.
    pub fn active_with(&self, config: &LoggerConfig) -> Arc<dyn Backend> {
        self.active_or_init(|| config.clone())
    }

    /// The active backend. `config` is only called when nothing is active
    /// yet.
    pub fn active_or_init<F>(&self, config: F) -> Arc<dyn Backend>
    where
        F: FnOnce() -> LoggerConfig,
    {
        if let Some(backend) = self.active.read().as_ref() {
            return Arc::clone(backend);
        }

        let mut active = self.active.write();
        // Another caller may have won the race for the write lock
        if let Some(backend) = active.as_ref() {
            return Arc::clone(backend);
        }
        let backend = build_backend("", &config());
        *active = Some(Arc::clone(&backend));
        backend
    }

    pub fn is_initialized(&self) -> bool {
        self.active.read().is_some()
    }

    /// Forget the active backend; the next `active` call selects again.
    pub fn reset(&self) {
        *self.active.write() = None;
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// The active logger, initialized from the environment on first use.
pub fn logger() -> Arc<dyn Backend> {
    global().active()
}

/// Select the process-wide logger by name.
///
/// Supported names (see [`list_logger_names`]):
/// - `"pretty"`, `"colorful"`: human friendly colorful logger
/// - `"icon"`, `"emoji"`: human friendly logger with icons
/// - `"structured"`, `"json"`, `"zap"`: JSON lines
/// - `"none"`, `"mock"`, `"empty"`, `"ignore"`: prints nothing
///
/// An empty name reads [`crate::ENV_LOGGER_NAME`]; anything unrecognized
/// selects `"pretty"`. [`crate::ENV_LOGGER_LEVEL`], when set, is applied
/// right after.
pub fn init_logger(name: &str) {
    global().select(name);
}

pub fn init_default_logger() {
    init_logger("");
}

pub fn list_logger_names() -> [&'static str; 4] {
    list_names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Level, MemorySink, Sink};

    fn config(name: &str, level: &str) -> LoggerConfig {
        LoggerConfig::new().with_name(name).with_level(level)
    }

    #[test]
    fn test_aliases() {
        let cases = [
            ("pretty", BackendKind::Pretty),
            ("Colorful", BackendKind::Pretty),
            ("ICON", BackendKind::Icon),
            ("emoji", BackendKind::Icon),
            ("structured", BackendKind::Structured),
            ("zap", BackendKind::Structured),
            ("json", BackendKind::Structured),
            ("none", BackendKind::None),
            ("mock", BackendKind::None),
            ("empty", BackendKind::None),
            ("Ignore", BackendKind::None),
            ("", BackendKind::Pretty),
            ("syslog", BackendKind::Pretty),
        ];
        for (name, expected) in cases {
            assert_eq!(BackendKind::resolve(name), expected, "name {:?}", name);
        }
    }

    #[test]
    fn test_list_names() {
        assert_eq!(list_names(), ["pretty", "icon", "structured", "none"]);
        for name in list_names() {
            assert_eq!(BackendKind::resolve(name).build().name(), name);
        }
    }

    #[test]
    fn test_select_table() {
        // (argument, configured name, configured level, expected name, expected level)
        let cases = [
            ("", "", "", "pretty", "info"),
            ("zap", "", "", "structured", "info"),
            ("zap", "", "debug", "structured", "debug"),
            ("", "zap", "debug", "structured", "debug"),
            ("pretty", "", "debug", "pretty", "debug"),
            ("colorful", "", "warning", "pretty", "warning"),
            ("none", "", "error", "none", ""),
            ("", "mock", "", "none", ""),
            ("", "empty", "", "none", ""),
            ("icon", "none", "", "icon", "info"),
        ];

        for (arg, env_name, env_level, name, level) in cases {
            let registry = Registry::new();
            let backend = registry.select_with(arg, &config(env_name, env_level));
            assert_eq!(backend.name(), name, "arg {:?}", arg);
            assert_eq!(backend.get_level(), level, "arg {:?}", arg);
            assert_eq!(registry.active_with(&LoggerConfig::default()).name(), name);
        }
    }

    #[test]
    fn test_bad_level_keeps_default_and_warns() {
        let memory = MemorySink::new();
        let backend = PrettyBackend::with_sink(Sink::from(memory.clone()));

        apply_level(&backend, &config("", "bogus"));

        assert_eq!(backend.level(), Level::Info);
        let out = memory.contents();
        assert!(out.contains("failed to set logger level"));
        assert!(out.contains("environment: KS_LOGGER_LEVEL"));
        assert!(out.contains("error: level 'bogus' unknown"));
    }

    #[test]
    fn test_lazy_default() {
        let registry = Registry::new();
        assert!(!registry.is_initialized());

        let first = registry.active_with(&config("icon", ""));
        assert!(registry.is_initialized());
        assert_eq!(first.name(), "icon");

        // Later config is ignored once something is active
        let second = registry.active_with(&config("none", ""));
        assert!(Arc::ptr_eq(&first, &second));

        registry.reset();
        assert!(!registry.is_initialized());
        assert_eq!(registry.active_with(&config("none", "")).name(), "none");
    }

    #[test]
    fn test_config_read_only_for_lazy_init() {
        let registry = Registry::new();
        let mut reads = 0;
        registry.active_or_init(|| {
            reads += 1;
            config("none", "")
        });
        for _ in 0..3 {
            registry.active_or_init(|| {
                reads += 1;
                config("icon", "")
            });
        }
        assert_eq!(reads, 1);
        assert_eq!(registry.active_with(&LoggerConfig::default()).name(), "none");
    }

    #[test]
    fn test_last_select_wins() {
        let registry = Registry::new();
        registry.select_with("icon", &LoggerConfig::default());
        registry.select_with("mock", &LoggerConfig::default());
        assert_eq!(registry.active_with(&LoggerConfig::default()).name(), "none");

        registry.install(Arc::new(NoneBackend));
        assert_eq!(registry.active_with(&LoggerConfig::default()).name(), "none");
    }
}
