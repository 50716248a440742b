use crate::domain::model::{OutputFormat, ProbeReport, ProbeRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A configuration layer. `None` means "not set here, ask the next layer".
pub trait ConfigProvider: Send + Sync {
    fn target_url(&self) -> Option<&str>;
    fn timeout(&self) -> Option<Duration>;
    fn output_format(&self) -> Option<OutputFormat>;
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &ProbeRequest) -> Result<ProbeReport>;
}
