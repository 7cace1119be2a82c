//! Structured log record with distributed tracing support

use super::detail::Detail;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tracing context for distributed tracing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingContext {
    /// Trace ID for request correlation
    pub trace_id: String,

    /// Span ID for this operation
    pub span_id: String,

    /// Parent span ID (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
}

impl TracingContext {
    /// Create a new tracing context
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            parent_span_id: None,
        }
    }

    /// Start a new trace with random 128-bit trace and 64-bit span ids
    pub fn new_root() -> Self {
        let mut rng = rand::thread_rng();
        Self::new(
            format!("{:032x}", rng.gen::<u128>()),
            format!("{:016x}", rng.gen::<u64>()),
        )
    }

    /// Derive a span in the same trace whose parent is this span
    pub fn child(&self) -> Self {
        Self {
            trace_id: self.trace_id.clone(),
            span_id: format!("{:016x}", rand::thread_rng().gen::<u64>()),
            parent_span_id: Some(self.span_id.clone()),
        }
    }

    /// Set parent span ID
    pub fn with_parent(mut self, parent_span_id: impl Into<String>) -> Self {
        self.parent_span_id = Some(parent_span_id.into());
        self
    }
}

/// One line of structured output
#[derive(Debug, Clone, Serialize)]
pub struct Record<'a> {
    pub level: &'a str,

    /// RFC 3339 timestamp, UTC, second precision
    pub ts: String,

    pub msg: &'a str,

    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,

    #[serde(flatten)]
    pub tracing: Option<&'a TracingContext>,
}

impl<'a> Record<'a> {
    pub fn new(level: &'a str, msg: &'a str, details: &[Detail]) -> Self {
        let fields = details
            .iter()
            .map(|d| (d.key().to_string(), d.value().to_json_value()))
            .collect();

        Self {
            level,
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            msg,
            fields,
            tracing: None,
        }
    }

    /// Add tracing context
    pub fn with_tracing(mut self, tracing: Option<&'a TracingContext>) -> Self {
        self.tracing = tracing;
        self
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let details = [Detail::int("code", 42), Detail::string("user", "alice")];
        let json = Record::new("warn", "careful", &details).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["msg"], "careful");
        assert_eq!(parsed["code"], 42);
        assert_eq!(parsed["user"], "alice");
        assert!(parsed["ts"].as_str().unwrap().ends_with('Z'));
        assert!(parsed.get("trace_id").is_none());
    }

    #[test]
    fn test_field_order_starts_with_level() {
        let json = Record::new("info", "hello", &[]).to_json().unwrap();
        assert!(json.starts_with(r#"{"level":"info","ts":"#));
    }

    #[test]
    fn test_record_with_tracing() {
        let tracing = TracingContext::new("trace-123", "span-456").with_parent("span-001");
        let json = Record::new("info", "hello", &[])
            .with_tracing(Some(&tracing))
            .to_json()
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["trace_id"], "trace-123");
        assert_eq!(parsed["span_id"], "span-456");
        assert_eq!(parsed["parent_span_id"], "span-001");
    }

    #[test]
    fn test_root_and_child_ids() {
        let root = TracingContext::new_root();
        assert_eq!(root.trace_id.len(), 32);
        assert_eq!(root.span_id.len(), 16);
        assert!(root.parent_span_id.is_none());

        let child = root.child();
        assert_eq!(child.trace_id, root.trace_id);
        assert_eq!(child.parent_span_id.as_deref(), Some(root.span_id.as_str()));
        assert_eq!(child.span_id.len(), 16);
    }

    #[test]
    fn test_tracing_context_roundtrip() {
        let tracing = TracingContext::new("t", "s");
        let json = serde_json::to_string(&tracing).unwrap();
        assert_eq!(json, r#"{"trace_id":"t","span_id":"s"}"#);
        let back: TracingContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tracing);
    }
}
