use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use std::path::PathBuf;
use std::time::Duration;

use super::MAX_TIMEOUT_SECONDS;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "http-smoke")]
#[command(about = "Send one GET request and print the status, body and headers")]
pub struct CliConfig {
    /// Target URL [default: http://localhost:8081]
    #[arg(env = "SMOKE_URL")]
    pub url: Option<String>,

    /// TOML file with [target] and [output] sections
    #[arg(long, env = "SMOKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "SMOKE_TIMEOUT")]
    pub timeout: Option<u64>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn target_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            validate_range("--timeout", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        Ok(())
    }
}
