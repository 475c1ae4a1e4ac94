use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One enrollment as stored in the `waitlist` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. The email must already be normalized and validated.
#[derive(Debug, Clone)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl NewWaitlistEntry {
    pub fn now(email: String) -> Self {
        Self {
            email,
            created_at: Utc::now(),
        }
    }
}
