use std::time::Duration;

use actix_web::cookie::Key;

use crate::errors::AppError;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_APP_NAME: &str = "Hospital CMS";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub bind_addr: String,
    pub app_name: String,
    pub backend_timeout: Duration,
    pub session_key: Key,
}

impl AppConfig {
    /// Load from the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let backend_url = lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(AppError::Config(format!("BACKEND_URL must be an http(s) URL, got '{backend_url}'")));
        }

        let backend_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| AppError::Config(format!("BACKEND_TIMEOUT_SECS is not a number: '{raw}'")))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        // Session cookies are encrypted with this key; a generated one invalidates sessions on restart.
        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        };

        Ok(Self {
            backend_url,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            backend_timeout,
            session_key,
        })
    }
}
