use sqlx::PgPool;

use crate::app_error::AppError;

pub mod waitlist;

/// SQLSTATE for unique_violation.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return AppError::AlreadyOnWaitlist;
            }
        }

        // Logged once at the HTTP boundary; the message never reaches the caller.
        AppError::Database(err.to_string())
    }
}
