use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

use crate::application::email_templates::TemplateStyle;

pub struct AppConfig {
    pub database_url: String,
    pub resend_api_key: SecretString,
    /// Sender shown on confirmation emails, e.g. `Admin @ 11:34 <admin@1134.world>`.
    pub email_from: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub brand_name: String,
    /// Defaults to `Admin @ {brand_name}` when unset.
    pub email_signature: Option<String>,
    pub template_style: TemplateStyle,
    /// Hosted logo for the branded template. Takes precedence over `logo_path`.
    pub logo_url: Option<String>,
    /// PNG inlined into the branded template as a data URI.
    pub logo_path: Option<PathBuf>,
    /// Optional JSON log file next to the console output.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: String = get_env("DATABASE_URL");
        let resend_api_key: SecretString =
            SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let email_from: String = get_env("EMAIL_FROM");

        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:4321"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let brand_name: String = get_env_default("BRAND_NAME", "11:34".to_string());
        let email_signature = optional_env("EMAIL_SIGNATURE");
        let template_style: TemplateStyle =
            get_env_default("WAITLIST_TEMPLATE", String::from("branded"))
                .parse()
                .expect("WAITLIST_TEMPLATE must be 'branded' or 'plain'");
        let logo_url = optional_env("WAITLIST_LOGO_URL");
        let logo_path = optional_env("WAITLIST_LOGO_PATH").map(PathBuf::from);
        let log_file = optional_env("LOG_FILE").map(PathBuf::from);

        Self {
            database_url,
            resend_api_key,
            email_from,
            bind_addr,
            cors_origin,
            brand_name,
            email_signature,
            template_style,
            logo_url,
            logo_path,
            log_file,
        }
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
