use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Header name used when a profile has neither first nor last name.
    pub export_placeholder_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            database_url: lookup("DATABASE_URL")
                .context("Required environment variable 'DATABASE_URL' is not set")?,
            database_max_connections: var_or("DATABASE_MAX_CONNECTIONS", "10")
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            port: var_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var_or("RUST_LOG", "info"),
            export_placeholder_name: var_or("EXPORT_PLACEHOLDER_NAME", DEFAULT_PLACEHOLDER_NAME),
        })
    }
}

pub const DEFAULT_PLACEHOLDER_NAME: &str = "Your Name";
