#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::ReportOptions;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty, validate_positive_number, validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection parameters for one AXL session.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
    /// Accept invalid TLS certificates. Off unless explicitly requested.
    pub insecure: bool,
}

/// Fully resolved runtime settings: connection, report shape, and output
/// styling, merged from command-line flags and the optional TOML file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub connection: ConnectionSettings,
    pub report: ReportOptions,
    pub color: bool,
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.connection.endpoint)?;
        validate_non_empty("username", &self.connection.username)?;
        validate_non_empty("password", &self.connection.password)?;
        validate_positive_number("timeout_seconds", self.connection.timeout.as_secs(), 1)?;
        Ok(())
    }
}
