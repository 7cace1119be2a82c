//! Trace correlation setup
//!
//! [`init_telemetry`] prepares what an exporter needs (collector DSN and
//! resource attributes) and opens the root [`TracingContext`] that backends
//! bind to via `with_context`. Shipping spans is left to the exporter.
//!
//! ```no_run
//! use rust_logger_facade::telemetry::{init_telemetry, shutdown_telemetry, TelemetryConfig};
//! use rust_logger_facade::logger;
//!
//! let config = TelemetryConfig::new("scanner", "v1.2.0")
//!     .with_account("acct-1")
//!     .with_cluster("prod")
//!     .with_collector("otel-collector:14318");
//! let telemetry = init_telemetry(&config).expect("valid collector url");
//!
//! let span = telemetry.span();
//! logger().with_context(&span).info("scan started", &[]);
//!
//! shutdown_telemetry(&telemetry);
//! ```

use crate::core::{LoggerError, Result, TracingContext};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub version: String,
    pub account_id: String,
    pub cluster_name: String,
    /// Collector address; scheme, user and path are filled in when missing
    pub collector_url: String,
}

impl TelemetryConfig {
    pub fn new(service_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_cluster(mut self, cluster_name: impl Into<String>) -> Self {
        self.cluster_name = cluster_name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_collector(mut self, collector_url: impl Into<String>) -> Self {
        self.collector_url = collector_url.into();
        self
    }
}

/// Fill in the parts of a collector address the exporter expects: `http`
/// scheme, user `t` and path `/1`.
pub fn normalize_collector_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LoggerError::config("telemetry", "collector url is empty"));
    }
    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| {
        LoggerError::config("telemetry", format!("invalid collector url '{}': {}", raw, e))
    })?;
    if url.username().is_empty() && url.set_username("t").is_err() {
        return Err(LoggerError::config(
            "telemetry",
            format!("collector url '{}' cannot carry credentials", raw),
        ));
    }
    if url.path().is_empty() || url.path() == "/" {
        url.set_path("1");
    }
    Ok(url)
}

/// Live telemetry setup, torn down once with [`shutdown_telemetry`].
#[derive(Debug)]
pub struct TelemetryContext {
    dsn: Url,
    resource: BTreeMap<String, String>,
    root: TracingContext,
    shut_down: AtomicBool,
}

impl TelemetryContext {
    pub fn dsn(&self) -> &Url {
        &self.dsn
    }

    /// Resource attributes attached to every exported span
    pub fn resource(&self) -> &BTreeMap<String, String> {
        &self.resource
    }

    pub fn root(&self) -> &TracingContext {
        &self.root
    }

    /// A new span under the root
    pub fn span(&self) -> TracingContext {
        self.root.child()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }
}

pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryContext> {
    let dsn = normalize_collector_url(&config.collector_url)?;

    let resource = [
        ("service.name", &config.service_name),
        ("service.version", &config.version),
        ("account.id", &config.account_id),
        ("cluster.name", &config.cluster_name),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.clone()))
    .collect();

    Ok(TelemetryContext {
        dsn,
        resource,
        root: TracingContext::new_root(),
        shut_down: AtomicBool::new(false),
    })
}

/// Returns true for the call that actually shut down.
pub fn shutdown_telemetry(ctx: &TelemetryContext) -> bool {
    !ctx.shut_down.swap(true, Ordering::AcqRel)
}
