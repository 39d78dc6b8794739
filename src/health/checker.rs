// src/health/checker.rs
use crate::config::CheckConfig;
use crate::health::{CheckResult, CheckStatus};
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const HEALTHY_MESSAGE: &str = "Jenkins Health Parameters are OK";

/// One named sub-check as reported by the Jenkins Metrics plugin. Anything
/// other than `healthy: true` counts as unhealthy, including a missing
/// field; extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthcheckEntry {
    #[serde(default)]
    pub healthy: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Jenkins Service is not responding: {0}")]
    ConnectionRefused(String),

    #[error("Jenkins Service Connection timed out: {0}")]
    Timeout(String),

    #[error("Jenkins Service request failed: {0}")]
    Transport(String),

    #[error("Jenkins Service is not replying with a 200 response: {status}, {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Jenkins Health Parameters not OK: {body}, {name}")]
    UnhealthyCheck { name: String, body: String },

    #[error("Jenkins healthcheck response is not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl CheckError {
    /// Terminal status for this error: a response the server never promised
    /// to be JSON-parseable maps to UNKNOWN, everything else is a service
    /// failure and maps to CRITICAL.
    pub fn status(&self) -> CheckStatus {
        match self {
            CheckError::MalformedResponse(_) => CheckStatus::Unknown,
            _ => CheckStatus::Critical,
        }
    }

    pub fn into_result(self) -> CheckResult {
        CheckResult {
            status: self.status(),
            message: self.to_string(),
        }
    }
}

/// Issues a single GET against the healthcheck endpoint and folds the
/// response into one terminal [`CheckResult`].
pub struct HealthCheckRunner {
    client: Client,
}

impl HealthCheckRunner {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// The timeout bounds the whole request, connect and read combined.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Runs the check once. Never fails and never hangs: every transport or
    /// protocol error folds into a CRITICAL or UNKNOWN result, and the
    /// request is bounded by the client timeout.
    pub async fn run(&self, config: &CheckConfig) -> CheckResult {
        match self.execute(config).await {
            Ok(result) => result,
            Err(error) => error.into_result(),
        }
    }

    async fn execute(&self, config: &CheckConfig) -> Result<CheckResult, CheckError> {
        let url = config
            .target_url()
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        debug!("Requesting {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport_error)?;

        if status != StatusCode::OK {
            return Err(CheckError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        // BTreeMap keeps the scan order deterministic when more than one
        // entry is unhealthy.
        let healthchecks: BTreeMap<String, HealthcheckEntry> = serde_json::from_str(&body)?;

        debug!("Parsed {} healthcheck entries", healthchecks.len());

        for (name, entry) in &healthchecks {
            if !entry.healthy {
                return Err(CheckError::UnhealthyCheck {
                    name: name.clone(),
                    body,
                });
            }
        }

        Ok(CheckResult::ok(HEALTHY_MESSAGE))
    }
}

fn classify_transport_error(error: reqwest::Error) -> CheckError {
    if error.is_timeout() {
        CheckError::Timeout(error.to_string())
    } else if error.is_connect() {
        CheckError::ConnectionRefused(error.to_string())
    } else {
        CheckError::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_ignores_extra_fields() {
        let entry: HealthcheckEntry = serde_json::from_str(
            r#"{"healthy": true, "message": "db is up", "timestamp": "2015-08-06T10:37:07.275+0000"}"#,
        )
        .unwrap();
        assert!(entry.healthy);
        assert_eq!(entry.message.as_deref(), Some("db is up"));
    }

    #[test]
    fn missing_healthy_field_counts_as_unhealthy() {
        let entry: HealthcheckEntry = serde_json::from_str(r#"{"message": "no flag"}"#).unwrap();
        assert!(!entry.healthy);
    }

    #[test]
    fn response_map_iterates_sorted_by_name() {
        let body = r#"{"thread-deadlock":{"healthy":false},"disk-space":{"healthy":false}}"#;
        let healthchecks: BTreeMap<String, HealthcheckEntry> =
            serde_json::from_str(body).unwrap();
        let first_unhealthy = healthchecks
            .iter()
            .find(|(_, entry)| !entry.healthy)
            .map(|(name, _)| name.as_str());
        assert_eq!(first_unhealthy, Some("disk-space"));
    }

    #[test]
    fn malformed_response_maps_to_unknown() {
        let error = CheckError::MalformedResponse(
            serde_json::from_str::<serde_json::Value>("not-json").unwrap_err(),
        );
        assert_eq!(error.status(), CheckStatus::Unknown);
    }

    #[test]
    fn transport_errors_map_to_critical() {
        let error = CheckError::ConnectionRefused("connection refused".to_string());
        assert_eq!(error.status(), CheckStatus::Critical);

        let error = CheckError::UnexpectedStatus {
            status: 404,
            body: "not found".to_string(),
        };
        let result = error.into_result();
        assert_eq!(result.status, CheckStatus::Critical);
        assert!(result.message.contains("404"));
        assert!(result.message.contains("not found"));
    }
}
