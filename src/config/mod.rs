// src/config/mod.rs
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_SERVER: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PATH: &str = "/metrics/currentUser/healthcheck";

/// Resolved configuration for a single check run. Built once from CLI flags
/// (or defaults) and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub server: String,
    pub port: u16,
    pub path: String,
    pub use_tls: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            use_tls: false,
        }
    }
}

impl CheckConfig {
    pub fn validate(&self) -> Result<()> {
        if self.server.is_empty() {
            bail!("Server must not be empty");
        }
        if self.port == 0 {
            bail!("Port must be between 1 and 65535");
        }
        if !self.path.starts_with('/') {
            bail!("Healthcheck URI must be an absolute path: {}", self.path);
        }
        Ok(())
    }

    /// Compose `{scheme}://{server}:{port}{path}` for the healthcheck request.
    pub fn target_url(&self) -> Result<Url> {
        let scheme = if self.use_tls { "https" } else { "http" };
        let raw = format!("{}://{}:{}{}", scheme, self.server, self.port, self.path);
        Url::parse(&raw).with_context(|| format!("Invalid healthcheck URL: {}", raw))
    }
}
