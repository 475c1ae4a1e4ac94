//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates an `AppState` wired to in-memory fakes so
//! routes can be exercised without Postgres or Resend.

use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::{
        email_templates::{ConfirmationTemplate, LogoSource, TemplateStyle},
        use_cases::waitlist::{EmailSender, WaitlistRepo, WaitlistUseCases},
    },
    infra::config::AppConfig,
    test_utils::{InMemoryEmailSender, InMemoryWaitlistRepo},
};

pub const TEST_EMAIL_FROM: &str = "Admin @ 11:34 <admin@example.com>";

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo, sender) = TestAppStateBuilder::new().build_with_mocks();
///
/// let app_state = TestAppStateBuilder::new()
///     .with_email_sender(Arc::new(FailingEmailSender))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    repo: Arc<dyn WaitlistRepo>,
    email_sender: Arc<dyn EmailSender>,
    template_style: TemplateStyle,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryWaitlistRepo::new()),
            email_sender: Arc::new(InMemoryEmailSender::new()),
            template_style: TemplateStyle::Branded,
        }
    }

    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = repo;
        self
    }

    pub fn with_email_sender(mut self, email_sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = email_sender;
        self
    }

    pub fn with_template_style(mut self, style: TemplateStyle) -> Self {
        self.template_style = style;
        self
    }

    pub fn build(self) -> AppState {
        let config = test_config(self.template_style);
        let template = ConfirmationTemplate::new(
            config.template_style,
            config.brand_name.clone(),
            LogoSource::Url("https://cdn.example.com/logo.png".into()),
        );

        let waitlist_use_cases = WaitlistUseCases::new(
            self.repo,
            self.email_sender,
            template,
            config.email_from.clone(),
        );

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
        }
    }

    /// Build with fresh in-memory fakes and hand them back for assertions.
    ///
    /// Returns (AppState, Arc<InMemoryWaitlistRepo>, Arc<InMemoryEmailSender>).
    pub fn build_with_mocks(
        self,
    ) -> (AppState, Arc<InMemoryWaitlistRepo>, Arc<InMemoryEmailSender>) {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let sender = Arc::new(InMemoryEmailSender::new());

        let app_state = self
            .with_repo(repo.clone())
            .with_email_sender(sender.clone())
            .build();

        (app_state, repo, sender)
    }
}

fn test_config(template_style: TemplateStyle) -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/waitlist_test".into(),
        resend_api_key: SecretString::new("re_test_key".into()),
        email_from: TEST_EMAIL_FROM.into(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:4321"),
        brand_name: "11:34".into(),
        email_signature: None,
        template_style,
        logo_url: None,
        logo_path: None,
        log_file: None,
    }
}
