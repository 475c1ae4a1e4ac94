use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages are safe for logs. Debug output includes the #[source]
/// chain, which may contain the connection string: log with `%e`, not `?e`.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database connection failed. Check DATABASE_URL and ensure the database is running.")]
    DatabaseConnection(#[source] sqlx::Error),

    #[error("Email notifier misconfigured: {0}")]
    Notifier(String),

    #[error("Could not read logo file {path}")]
    Logo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client initialization failed")]
    HttpClient(#[source] reqwest::Error),
}
