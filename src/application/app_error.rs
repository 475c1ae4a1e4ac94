use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already on the waitlist")]
    AlreadyOnWaitlist,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Email delivery error: {0}")]
    Email(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message returned to the caller. Server-side details never appear here.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::InvalidInput(msg) => msg,
            AppError::AlreadyOnWaitlist => "This email is already on the waitlist",
            AppError::Database(_) => "Failed to join waitlist. Please try again.",
            AppError::Email(_) | AppError::Internal(_) => "Internal server error",
        }
    }

    /// Client mistakes are expected and not logged as server faults.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_) | AppError::AlreadyOnWaitlist)
    }
}

pub type AppResult<T> = Result<T, AppError>;
