use crate::core::{ConfigProvider, OutputFormat, ProbeRequest};
use crate::domain::model::DEFAULT_TARGET_URL;
use std::time::Duration;

/// Effective settings after merging every configuration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub url: String,
    pub timeout: Option<Duration>,
    pub format: OutputFormat,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_TARGET_URL.to_string(),
            timeout: None,
            format: OutputFormat::default(),
        }
    }
}

impl ProbeSettings {
    /// Layers are ordered by priority: the first one that sets a value wins.
    pub fn from_layers(layers: &[&dyn ConfigProvider]) -> Self {
        let defaults = Self::default();

        Self {
            url: layers
                .iter()
                .find_map(|layer| layer.target_url())
                .map(str::to_string)
                .unwrap_or(defaults.url),
            timeout: layers.iter().find_map(|layer| layer.timeout()),
            format: layers
                .iter()
                .find_map(|layer| layer.output_format())
                .unwrap_or(defaults.format),
        }
    }

    pub fn to_request(&self) -> ProbeRequest {
        ProbeRequest::new(self.url.clone()).with_timeout(self.timeout)
    }
}
