use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("{0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrlError { url: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SmokeError {
    /// Transport failures and unusable target URLs form the single category
    /// that is reported on stdout instead of failing the process.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            SmokeError::RequestError(_) | SmokeError::InvalidUrlError { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_request_failure() {
            0
        } else {
            1
        }
    }

    /// The message followed by every underlying cause, joined with ": ".
    pub fn describe(&self) -> String {
        describe_chain(self)
    }
}

pub fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        // Wrappers that display "{0}" repeat their source verbatim.
        if !parts.last().is_some_and(|last| last.ends_with(&message)) {
            parts.push(message);
        }
        source = cause.source();
    }
    parts.join(": ")
}

pub type Result<T> = std::result::Result<T, SmokeError>;
