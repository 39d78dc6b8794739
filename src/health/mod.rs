// src/health/mod.rs
mod checker;
mod status;

pub use checker::{CheckError, HealthCheckRunner, HealthcheckEntry};
pub use status::{CheckResult, CheckStatus};
