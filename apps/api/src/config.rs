use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on jobs accepted by a single recommendations request.
    pub max_jobs_per_request: usize,
    pub cors_permissive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_jobs_per_request: 500,
            cors_permissive: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: match optional_env("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            max_jobs_per_request: match optional_env("MAX_JOBS_PER_REQUEST") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_JOBS_PER_REQUEST must be a non-negative integer")?,
                None => defaults.max_jobs_per_request,
            },
            cors_permissive: match optional_env("CORS_PERMISSIVE") {
                Some(v) => parse_flag(&v).context("CORS_PERMISSIVE must be true or false")?,
                None => defaults.cors_permissive,
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("unrecognized flag value '{other}'"),
    }
}
