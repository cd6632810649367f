use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::professional::InvalidWindow;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Professional not found: {0}")]
    ProfessionalNotFound(Uuid),

    #[error("Invalid availability window: {0}")]
    InvalidWindow(#[from] InvalidWindow),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<SchedulingError> for AppError {
    fn from(error: SchedulingError) -> Self {
        match error {
            SchedulingError::ProfessionalNotFound(_) => AppError::NotFound(error.to_string()),
            SchedulingError::InvalidWindow(_) | SchedulingError::ValidationError(_) => {
                AppError::BadRequest(error.to_string())
            }
        }
    }
}
