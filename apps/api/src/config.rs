use anyhow::{Context, Result};
use uuid::Uuid;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Owner of every request until real authentication exists.
    pub default_user_id: Uuid,
    pub default_username: String,
    pub default_user_email: String,
    pub uploads_dir: String,
    pub cv_parser_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_user_id = require_env("DEFAULT_USER_ID")?
            .parse::<Uuid>()
            .context("DEFAULT_USER_ID must be a UUID")?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            default_user_id,
            default_username: optional_env("DEFAULT_USERNAME", "Utilisateur"),
            default_user_email: optional_env("DEFAULT_USER_EMAIL", "user@example.com"),
            uploads_dir: optional_env("UPLOADS_DIR", "./uploads"),
            cv_parser_url: optional_env("CV_PARSER_URL", "http://localhost:8000"),
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
