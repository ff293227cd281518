//! API endpoint configuration.
//!
//! The browser bundle has no process environment, so `API_BASE` is captured
//! at build time with `option_env!`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8081/api/v1";
pub const DEFAULT_GRAFANA_URL: &str = "http://localhost:3001";
pub const DEFAULT_PROMETHEUS_URL: &str = "http://localhost:9091";
pub const DEFAULT_GRAYLOG_URL: &str = "http://localhost:9000";

/// Version segment removed from the base URL for unversioned endpoints.
const API_VERSION_SEGMENT: &str = "/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base: String,
}

/// An external operations dashboard shown on the users page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoringLink {
    pub label: &'static str,
    pub url: String,
}

/// Dashboard links from the build-time environment.
///
/// Optional:
/// - `GRAFANA_URL`: default `http://localhost:3001`
/// - `PROMETHEUS_URL`: default `http://localhost:9091`
/// - `GRAYLOG_URL`: default `http://localhost:9000`
#[must_use]
pub fn monitoring_links() -> Vec<MonitoringLink> {
    vec![
        link("Grafana", option_env!("GRAFANA_URL"), DEFAULT_GRAFANA_URL),
        link("Prometheus", option_env!("PROMETHEUS_URL"), DEFAULT_PROMETHEUS_URL),
        link("Graylog", option_env!("GRAYLOG_URL"), DEFAULT_GRAYLOG_URL),
    ]
}

fn link(label: &'static str, raw: Option<&str>, default: &str) -> MonitoringLink {
    let url = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    MonitoringLink { label, url: url.trim_end_matches('/').to_owned() }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApiConfig {
    /// Build config from the build-time `API_BASE` variable.
    ///
    /// Optional:
    /// - `API_BASE`: default `http://localhost:8081/api/v1`
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_base(option_env!("API_BASE").filter(|v| !v.trim().is_empty()).unwrap_or(DEFAULT_API_BASE))
    }

    #[must_use]
    pub fn with_base(api_base: &str) -> Self {
        Self { api_base: api_base.trim().trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for a versioned API path such as `/users`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Health-check URL: the base without its API version segment.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_base.replacen(API_VERSION_SEGMENT, "", 1))
    }
}
