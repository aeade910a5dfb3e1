//! Environment-driven configuration. Secrets come from env vars (a local
//! `.env` is honored); nothing is read from ambient storage after startup.

use anyhow::{Context, Result};
use tracing::info;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API root, e.g. `http://localhost:8000/api`.
    pub api_base_url: String,
    pub email: String,
    pub password: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url =
            std::env::var("RESUME_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let email = std::env::var("RESUME_API_EMAIL")
            .context("RESUME_API_EMAIL environment variable not set")?;
        let password = std::env::var("RESUME_API_PASSWORD")
            .context("RESUME_API_PASSWORD environment variable not set")?;

        info!(base_url = %api_base_url, email = %email, "configuration loaded");
        Ok(Self {
            api_base_url,
            email,
            password,
        })
    }
}
