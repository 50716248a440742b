use crate::config::MAX_TIMEOUT_SECONDS;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target: Option<TargetConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SmokeError::ConfigError {
            message: format!("Cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SmokeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SMOKE_HOST})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SmokeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn target_url(&self) -> Option<&str> {
        self.target.as_ref()?.url.as_deref()
    }

    fn timeout(&self) -> Option<Duration> {
        self.target
            .as_ref()?
            .timeout_seconds
            .map(Duration::from_secs)
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref()?.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(target) = &self.target {
            if let Some(url) = &target.url {
                validate_url("target.url", url)?;
            }
            if let Some(timeout) = target.timeout_seconds {
                validate_range("target.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
            }
        }
        Ok(())
    }
}
