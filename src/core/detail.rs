//! Key/value annotations attached to a single log call

use serde::Serialize;
use std::fmt;

/// Value carried by a [`Detail`]
#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    String(String),
    /// Rendered error message
    Error(String),
    Int(i64),
    /// Arbitrary serializable value
    Any(serde_json::Value),
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::String(s) | DetailValue::Error(s) => write!(f, "{}", s),
            DetailValue::Int(i) => write!(f, "{}", i),
            DetailValue::Any(serde_json::Value::String(s)) => write!(f, "{}", s),
            DetailValue::Any(v) => write!(f, "{}", v),
        }
    }
}

impl DetailValue {
    /// Convert to serde_json::Value for structured output
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            DetailValue::String(s) | DetailValue::Error(s) => serde_json::Value::String(s.clone()),
            DetailValue::Int(i) => serde_json::Value::Number((*i).into()),
            DetailValue::Any(v) => v.clone(),
        }
    }
}

/// A single `key: value` annotation.
///
/// Details live for the duration of one log call; backends borrow them and
/// never keep them.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    key: String,
    value: DetailValue,
}

impl Detail {
    fn new(key: impl Into<String>, value: DetailValue) -> Self {
        let key = key.into();
        debug_assert!(!key.is_empty(), "detail keys must not be empty");
        Self { key, value }
    }

    /// Text value. Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn string(key: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        let value = String::from_utf8_lossy(value.as_ref()).into_owned();
        Self::new(key, DetailValue::String(value))
    }

    /// Error value under the key `error`.
    pub fn error<E: fmt::Display + ?Sized>(err: &E) -> Self {
        Self::new("error", DetailValue::Error(err.to_string()))
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, DetailValue::Int(value))
    }

    /// Any serializable value. A value that fails to serialize is recorded as
    /// its serialization error message.
    pub fn any<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Self {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| serde_json::Value::String(e.to_string()));
        Self::new(key, DetailValue::Any(value))
    }

    /// Current local time under the key `time`.
    pub fn time() -> Self {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self::new("time", DetailValue::String(now))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &DetailValue {
        &self.value
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Join details as `k1: v1; k2: v2`.
pub fn details_to_string(details: &[Detail]) -> String {
    details
        .iter()
        .map(Detail::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// `msg` alone, or `msg. k1: v1; k2: v2` when details are present.
pub fn format_message(msg: &str, details: &[Detail]) -> String {
    if details.is_empty() {
        msg.to_string()
    } else {
        format!("{}. {}", msg, details_to_string(details))
    }
}
