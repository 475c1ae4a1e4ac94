use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            r#"INSERT INTO waitlist (id, email, created_at)
               VALUES ($1, $2, $3)
               RETURNING id, email, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&entry.email)
        .bind(entry.created_at)
        .fetch_one(self.pool())
        .await?;

        Ok(rec)
    }
}
