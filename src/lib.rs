pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ProbeSettings, TomlConfig};
pub use core::{fetcher::HttpFetcher, probe::ProbeEngine, report::render};
pub use domain::model::{OutputFormat, ProbeOutcome, ProbeReport, ProbeRequest};
pub use utils::error::{Result, SmokeError};
