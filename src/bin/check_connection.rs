//! Checks that `DATABASE_URL` reaches a database with a usable `waitlist` table.
//!
//! Run with `cargo run --bin check-connection`. Reads `.env` like the server.

use std::process::ExitCode;
use std::str::FromStr;

use dotenvy::dotenv;
use sqlx::{Connection, PgConnection, postgres::PgConnectOptions};
use tracing::{error, info};

use waitlist::infra::setup::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing(None);

    // Read directly instead of via env_helpers so a missing value is reported, not a panic.
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        error!("DATABASE_URL is not set (environment or .env)");
        return ExitCode::FAILURE;
    };

    match count_waitlist(&database_url).await {
        Ok(rows) => {
            info!(rows, "Connected. The waitlist table is reachable.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = match &err {
                sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
                _ => None,
            };
            error!(error = %err, code = code.as_deref().unwrap_or("-"), "Connection check failed");
            info!("{}", hint(&err, code.as_deref()));
            ExitCode::FAILURE
        }
    }
}

async fn count_waitlist(database_url: &str) -> Result<i64, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?;
    info!(
        host = options.get_host(),
        port = options.get_port(),
        user = options.get_username(),
        database = options.get_database().unwrap_or("<default>"),
        "Testing database connection"
    );

    let mut conn = PgConnection::connect_with(&options).await?;
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist")
        .fetch_one(&mut conn)
        .await?;
    conn.close().await?;

    Ok(rows)
}

fn hint(err: &sqlx::Error, code: Option<&str>) -> &'static str {
    match code {
        // undefined_table
        Some("42P01") => "The waitlist table doesn't exist yet. Run sql/waitlist.sql against the database.",
        // invalid_password, invalid_authorization_specification
        Some("28P01") | Some("28000") => {
            "Authentication failed. Check the user and password in DATABASE_URL."
        }
        Some(_) => "The database rejected the query. Check the table definition in sql/waitlist.sql.",
        None => match err {
            sqlx::Error::Configuration(_) => "DATABASE_URL is not a valid postgres:// URL.",
            _ => "Make sure the database is running (not paused), reachable from this machine, and that DATABASE_URL points at it.",
        },
    }
}
