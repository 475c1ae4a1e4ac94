use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    infra::{error::InfraError, http_client},
    use_cases::waitlist::{EmailMessage, EmailSender},
};

const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";

#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_key: SecretString,
}

impl ResendEmailSender {
    /// Fails when the API key is blank so a misconfigured deployment never
    /// starts serving requests.
    pub fn new(api_key: SecretString) -> Result<Self, InfraError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(InfraError::Notifier("RESEND_API_KEY is empty".into()));
        }
        let client = http_client::try_build_client().map_err(InfraError::HttpClient)?;
        Ok(Self { client, api_key })
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

impl<'a> From<&'a EmailMessage> for ResendReq<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            from: &message.from,
            to: [&message.to],
            subject: &message.subject,
            html: &message.html,
            text: message.text.as_deref(),
        }
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        let response = self
            .client
            .post(RESEND_EMAILS_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&ResendReq::from(message))
            .send()
            .await
            .map_err(|e| AppError::Email(format!("Failed to send email: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Email(format!("Email API error {status}: {detail}")));
        }

        Ok(())
    }
}
