#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use settings::ProbeSettings;
pub use toml_config::TomlConfig;

pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
