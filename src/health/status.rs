// src/health/status.rs
use std::fmt;

/// Monitoring-plugin status vocabulary. WARNING is part of the convention
/// but this check never produces it; UNKNOWN covers malformed responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl CheckStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Critical => 2,
            CheckStatus::Unknown => 3,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Critical => "CRITICAL",
            CheckStatus::Unknown => "UNKNOWN",
        };
        f.write_str(word)
    }
}

/// The single terminal outcome of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Ok,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Critical,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Unknown,
            message: message.into(),
        }
    }

    /// One-line plugin output: status word, check name, message.
    pub fn output_line(&self, check_name: &str) -> String {
        format!("{} {}: {}", self.status, check_name, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_plugin_convention() {
        assert_eq!(CheckStatus::Ok.exit_code(), 0);
        assert_eq!(CheckStatus::Warning.exit_code(), 1);
        assert_eq!(CheckStatus::Critical.exit_code(), 2);
        assert_eq!(CheckStatus::Unknown.exit_code(), 3);
    }

    #[test]
    fn output_line_is_prefixed_with_status_and_name() {
        let result = CheckResult::ok("Jenkins Health Parameters are OK");
        assert_eq!(
            result.output_line("CheckJenkinsHealth"),
            "OK CheckJenkinsHealth: Jenkins Health Parameters are OK"
        );

        let result = CheckResult::critical("boom");
        assert_eq!(
            result.output_line("CheckJenkinsHealth"),
            "CRITICAL CheckJenkinsHealth: boom"
        );
    }
}
