// src/cli/mod.rs
use clap::{ArgAction, Parser};

use crate::config::CheckConfig;

/// Command-line surface of the check, compatible with the Sensu plugin
/// convention. `-h` selects HTTPS (not help), so the auto help flag is
/// disabled and `--help` is re-added explicitly.
#[derive(Parser, Debug)]
#[command(
    name = "check-jenkins-health",
    version,
    about = "Checks that the Jenkins Metrics healthcheck reports healthy",
    disable_help_flag = true
)]
pub struct Cli {
    /// Jenkins host
    #[arg(short = 's', long, default_value = "localhost")]
    pub server: String,

    /// Jenkins port
    #[arg(short = 'p', long, default_value_t = 8080)]
    pub port: u16,

    /// Jenkins Metrics healthcheck URI
    #[arg(short = 'u', long, default_value = "/metrics/currentUser/healthcheck")]
    pub uri: String,

    /// Enable https connections
    #[arg(short = 'h', long)]
    pub https: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    pub fn into_config(self) -> CheckConfig {
        CheckConfig {
            server: self.server,
            port: self.port,
            path: self.uri,
            use_tls: self.https,
        }
    }
}
