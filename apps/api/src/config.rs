use anyhow::{Context, Result};

pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "llama-3.1-8b-instant";

/// Application configuration loaded from environment variables.
/// Startup fails if `GROQ_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub completion_api_url: String,
    pub completion_model: String,
    pub completion_timeout_secs: u64,
    /// Upper bound on resume extractions in flight at once.
    pub resume_concurrency: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            completion_api_url: optional_env("COMPLETION_API_URL", DEFAULT_COMPLETION_API_URL),
            completion_model: optional_env("COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL),
            completion_timeout_secs: optional_env("COMPLETION_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("COMPLETION_TIMEOUT_SECS must be a whole number of seconds")?,
            resume_concurrency: optional_env("RESUME_CONCURRENCY", "4")
                .parse::<usize>()
                .context("RESUME_CONCURRENCY must be a positive integer")?
                .max(1),
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
