use anyhow::{bail, Context, Result};

use crate::session::DEFAULT_SESSION_TTL_SECS;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; a missing API key degrades every
/// generation action to a visible error instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_api_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Idle time after which a session and its generated text are dropped.
    pub session_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_api_url: optional_env("OPENAI_API_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got '{raw}'"))?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            session_ttl_secs: match optional_env("SESSION_TTL_SECS") {
                Some(raw) => parse_ttl(&raw)?,
                None => DEFAULT_SESSION_TTL_SECS,
            },
        })
    }
}

fn parse_ttl(raw: &str) -> Result<i64> {
    let secs = raw
        .parse::<i64>()
        .with_context(|| format!("SESSION_TTL_SECS must be a number of seconds, got '{raw}'"))?;
    if secs <= 0 {
        bail!("SESSION_TTL_SECS must be positive, got {secs}");
    }
    Ok(secs)
}

/// Unset and blank are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
