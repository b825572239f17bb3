use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl AppError {
    /// Short machine-readable category, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::ConfigError(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: AppError = config::ConfigError::Message("missing key".to_string()).into();
        assert_eq!(err.kind(), "config");
        assert!(err.to_string().contains("missing key"));
    }

    #[test]
    fn test_bad_request_kind() {
        let err = AppError::BadRequest(anyhow::anyhow!("unknown suite"));
        assert_eq!(err.kind(), "bad_request");
        assert_eq!(err.to_string(), "Bad request: unknown suite");
    }
}
