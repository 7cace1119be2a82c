//! Environment configuration for backend selection

/// Environment variable holding the backend name
pub const ENV_LOGGER_NAME: &str = "KS_LOGGER_NAME";

/// Environment variable holding the threshold level name
pub const ENV_LOGGER_LEVEL: &str = "KS_LOGGER_LEVEL";

/// Settings applied when a backend is selected.
///
/// Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Backend name used when the caller passes an empty name
    pub name: Option<String>,
    /// Threshold applied right after selection
    pub level: Option<String>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read [`ENV_LOGGER_NAME`] and [`ENV_LOGGER_LEVEL`]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, e.g. a map standing in for the environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            name: lookup(ENV_LOGGER_NAME).filter(|v| !v.is_empty()),
            level: lookup(ENV_LOGGER_LEVEL).filter(|v| !v.is_empty()),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into()).filter(|v| !v.is_empty());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into()).filter(|v| !v.is_empty());
        self
    }
}
