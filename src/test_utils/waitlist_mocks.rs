//! In-memory mock implementations for the waitlist ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{EmailMessage, EmailSender, WaitlistRepo},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo for testing.
/// Enforces email uniqueness the way the table's unique constraint does.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<HashMap<String, WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored emails, sorted (for test assertions).
    pub fn emails(&self) -> Vec<String> {
        let mut emails: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        emails.sort();
        emails
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        if entries.contains_key(&entry.email) {
            return Err(AppError::AlreadyOnWaitlist);
        }

        let row = WaitlistEntry {
            id: Uuid::new_v4(),
            email: entry.email.clone(),
            created_at: entry.created_at,
        };
        entries.insert(row.email.clone(), row.clone());
        Ok(row)
    }
}

/// Store that fails every insert with a non-uniqueness error.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Err(AppError::Database("connection refused".into()))
    }
}

// ============================================================================
// InMemoryEmailSender
// ============================================================================

/// Captures every message instead of sending it.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<EmailMessage>>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Sender whose API always rejects the message.
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _message: &EmailMessage) -> AppResult<()> {
        Err(AppError::Email("422 Unprocessable Entity".into()))
    }
}
