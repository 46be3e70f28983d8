use std::fmt;

use anyhow::{Context, Result};

use crate::occupations::report::DEFAULT_TOP_N;
use crate::onet_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Clone)]
pub struct Config {
    pub onet_username: String,
    pub onet_password: String,
    pub onet_base_url: String,
    pub report_top_n: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            onet_username: require("USERNAME")?,
            onet_password: require("PASSWORD")?,
            onet_base_url: lookup("ONET_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            report_top_n: match lookup("REPORT_TOP_N") {
                Some(v) => v.parse().context("REPORT_TOP_N must be a non-negative integer")?,
                None => DEFAULT_TOP_N,
            },
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("onet_username", &self.onet_username)
            .field("onet_password", &"<redacted>")
            .field("onet_base_url", &self.onet_base_url)
            .field("report_top_n", &self.report_top_n)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}
