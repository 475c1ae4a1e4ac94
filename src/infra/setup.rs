use crate::{
    adapters::{email::resend::ResendEmailSender, http::app_state::AppState},
    application::email_templates::{ConfirmationTemplate, LogoSource},
    infra::{config::AppConfig, error::InfraError, postgres_persistence},
    use_cases::waitlist::{EmailSender, WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if config.email_from.trim().is_empty() {
        return Err(InfraError::Notifier("EMAIL_FROM is empty".into()).into());
    }

    // Built before the database so a bad notifier config fails without a
    // round trip to Postgres.
    let email = Arc::new(ResendEmailSender::new(config.resend_api_key.clone())?);

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let template = confirmation_template(&config).await?;
    tracing::info!(
        template = config.template_style.as_str(),
        brand = %config.brand_name,
        "Confirmation template loaded"
    );

    let waitlist_use_cases = WaitlistUseCases::new(
        postgres_arc as Arc<dyn WaitlistRepo>,
        email as Arc<dyn EmailSender>,
        template,
        config.email_from.clone(),
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

async fn confirmation_template(config: &AppConfig) -> Result<ConfirmationTemplate, InfraError> {
    let logo = match (&config.logo_url, &config.logo_path) {
        (Some(url), _) => LogoSource::Url(url.clone()),
        (None, Some(path)) => {
            let bytes = tokio::fs::read(path).await.map_err(|source| InfraError::Logo {
                path: path.display().to_string(),
                source,
            })?;
            LogoSource::inline_png(&bytes)
        }
        (None, None) => LogoSource::None,
    };

    let template =
        ConfirmationTemplate::new(config.template_style, config.brand_name.clone(), logo);
    Ok(match &config.email_signature {
        Some(signature) => template.with_signature(signature.clone()),
        None => template,
    })
}

pub fn init_tracing(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = log_file
        .and_then(|path| match File::create(path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("cannot create log file {}: {err}", path.display());
                None
            }
        })
        .map(|file| {
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true)
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
