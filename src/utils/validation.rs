use crate::utils::error::{Result, SmokeError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn check_url(url_str: &str) -> std::result::Result<Url, String> {
    if url_str.trim().is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    let url = Url::parse(url_str).map_err(|e| format!("Invalid URL format: {}", e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!("Unsupported URL scheme: {}", scheme)),
    }
}

/// Validates a URL read from configuration.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    check_url(url_str)
        .map(|_| ())
        .map_err(|reason| SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason,
        })
}

/// Parses the URL that is about to be probed. Failures here belong to the
/// request-failure category rather than to configuration.
pub fn parse_target_url(url_str: &str) -> Result<Url> {
    check_url(url_str).map_err(|reason| SmokeError::InvalidUrlError {
        url: url_str.to_string(),
        reason,
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
