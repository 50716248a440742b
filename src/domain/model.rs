use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TARGET_URL: &str = "http://localhost:8081";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub url: String,
    pub timeout: Option<Duration>,
}

impl ProbeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ProbeRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_URL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

/// A response that was fully received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    pub url: String,
    pub status: u16,
    /// In the order the client library yields them.
    pub headers: Vec<HeaderEntry>,
    pub body: String,
    pub elapsed_ms: u64,
    pub fetched_at: DateTime<Utc>,
}

impl ProbeReport {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    Response(ProbeReport),
    Failed { url: String, message: String },
}

impl ProbeOutcome {
    pub fn is_response(&self) -> bool {
        matches!(self, ProbeOutcome::Response(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
