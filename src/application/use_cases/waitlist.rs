use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        email_templates::ConfirmationTemplate,
        validators::{is_valid_email, normalize_email},
    },
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

// ============================================================================
// Ports
// ============================================================================

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Inserts one entry. A duplicate email yields `AppError::AlreadyOnWaitlist`.
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: Option<String>,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}

// ============================================================================
// Use cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    email: Arc<dyn EmailSender>,
    template: Arc<ConfirmationTemplate>,
    email_from: String,
}

impl WaitlistUseCases {
    pub fn new(
        repo: Arc<dyn WaitlistRepo>,
        email: Arc<dyn EmailSender>,
        template: ConfirmationTemplate,
        email_from: String,
    ) -> Self {
        Self {
            repo,
            email,
            template: Arc::new(template),
            email_from,
        }
    }

    /// Normalizes and validates `raw_email`, stores it, then sends the
    /// confirmation. Delivery failures are logged and never fail the join.
    #[instrument(skip(self, raw_email))]
    pub async fn join(&self, raw_email: &str) -> AppResult<WaitlistEntry> {
        let email = normalize_email(raw_email);
        if !is_valid_email(&email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }

        let entry = self.repo.insert(&NewWaitlistEntry::now(email)).await?;
        tracing::info!(entry_id = %entry.id, "Joined waitlist");

        self.send_confirmation(&entry).await;

        Ok(entry)
    }

    async fn send_confirmation(&self, entry: &WaitlistEntry) {
        let rendered = self.template.render(Utc::now().year());
        let message = EmailMessage {
            from: self.email_from.clone(),
            to: entry.email.clone(),
            subject: rendered.subject,
            html: rendered.html,
            text: Some(rendered.text),
        };

        // The entry already exists, so the outcome is only observed for logging.
        if let Err(err) = self.email.send(&message).await {
            tracing::error!(
                entry_id = %entry.id,
                error = %err,
                "Failed to send waitlist confirmation email"
            );
        }
    }
}
