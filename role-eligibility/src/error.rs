use console_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EligibilityError {
    #[error("Invalid role catalog payload: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] AppError),
}

impl From<EligibilityError> for AppError {
    fn from(err: EligibilityError) -> Self {
        match err {
            EligibilityError::Catalog(e) => AppError::BadRequest(anyhow::Error::new(e)),
            EligibilityError::Config(e) => e,
        }
    }
}
