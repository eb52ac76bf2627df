use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    /// Raw signing secret for session tokens. `None` means "generate one at startup".
    pub session_secret: Option<String>,
    pub session_ttl: Duration,
    pub request_timeout: Duration,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("BB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid BB_LISTEN_ADDR")?;
        let db_path =
            std::env::var("BB_DB_PATH").unwrap_or_else(|_| "./db/budgetbook.db".into());
        let session_secret = std::env::var("BB_SESSION_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let ttl_minutes: u64 = std::env::var("BB_SESSION_TTL_MINUTES")
            .unwrap_or_else(|_| "720".into())
            .parse()
            .unwrap_or(720);
        let timeout_ms: u64 = std::env::var("BB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let secure_cookies = std::env::var("BB_SECURE_COOKIES")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            listen_addr,
            db_path,
            session_secret,
            session_ttl: Duration::from_secs(ttl_minutes * 60),
            request_timeout: Duration::from_millis(timeout_ms),
            secure_cookies,
        })
    }
}
