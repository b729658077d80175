use crate::config::toml_config::TomlConfig;
use crate::config::{ConnectionSettings, Settings, DEFAULT_TIMEOUT_SECS};
use crate::domain::model::ReportOptions;
use crate::utils::error::{GatorError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::time::Duration;

pub const PASSWORD_ENV_VAR: &str = "CM_GATOR_PASSWORD";

#[derive(Debug, Clone, Parser)]
#[command(name = "cm-gator")]
#[command(about = "Per-location phone/user/line report over the CUCM AXL API")]
pub struct CliConfig {
    /// AXL endpoint URL, e.g. https://10.10.20.1:8443/axl/
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    /// AXL password; falls back to the CM_GATOR_PASSWORD environment
    /// variable or the configuration file
    #[arg(long)]
    pub password: Option<String>,

    /// TOML configuration file; command-line flags override its values
    #[arg(long)]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Accept invalid TLS certificates (self-signed lab systems)
    #[arg(long)]
    pub insecure: bool,

    /// Leave phone data out of the report
    #[arg(long)]
    pub no_phones: bool,

    /// Leave user data out of the report
    #[arg(long)]
    pub no_users: bool,

    /// Leave directory-number data out of the report
    #[arg(long)]
    pub no_lines: bool,

    /// Log every AXL fetch and its result count
    #[arg(long)]
    pub debug: bool,

    /// ANSI-colorize the printed report
    #[arg(long)]
    pub color: bool,
}

impl CliConfig {
    /// Merges flags with the optional TOML file (flags win) into runtime
    /// settings. Fails when no source supplies endpoint or credentials.
    pub fn into_settings(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };
        let file_connection = file.as_ref().map(|f| f.connection.clone());

        let endpoint = self
            .endpoint
            .or_else(|| file_connection.as_ref().map(|c| c.endpoint.clone()))
            .ok_or_else(|| GatorError::ConfigError {
                message: "No AXL endpoint given (use --endpoint or a config file)".to_string(),
            })?;
        let username = self
            .username
            .or_else(|| file_connection.as_ref().map(|c| c.username.clone()))
            .ok_or_else(|| GatorError::ConfigError {
                message: "No username given (use --username or a config file)".to_string(),
            })?;
        let password = self
            .password
            .or_else(|| std::env::var(PASSWORD_ENV_VAR).ok())
            .or_else(|| file_connection.as_ref().map(|c| c.password.clone()))
            .ok_or_else(|| GatorError::ConfigError {
                message: format!(
                    "No password given (use --password, {} or a config file)",
                    PASSWORD_ENV_VAR
                ),
            })?;

        let timeout_secs = self
            .timeout_secs
            .or_else(|| file_connection.as_ref().and_then(|c| c.timeout_seconds))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let insecure = self.insecure
            || file_connection
                .as_ref()
                .and_then(|c| c.insecure)
                .unwrap_or(false);

        let file_report = file.as_ref().and_then(|f| f.report.clone());
        let report = ReportOptions {
            include_phones: !self.no_phones
                && file_report.as_ref().and_then(|r| r.phones).unwrap_or(true),
            include_users: !self.no_users
                && file_report.as_ref().and_then(|r| r.users).unwrap_or(true),
            include_directory_numbers: !self.no_lines
                && file_report
                    .as_ref()
                    .and_then(|r| r.directory_numbers)
                    .unwrap_or(true),
        };

        let color = self.color
            || file
                .as_ref()
                .and_then(|f| f.output.as_ref())
                .and_then(|o| o.color)
                .unwrap_or(false);

        Ok(Settings {
            connection: ConnectionSettings {
                endpoint,
                username,
                password,
                timeout: Duration::from_secs(timeout_secs),
                insecure,
            },
            report,
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> CliConfig {
        CliConfig::parse_from(["cm-gator"])
    }

    #[test]
    fn flags_resolve_without_config_file() {
        let cli = CliConfig::parse_from([
            "cm-gator",
            "--endpoint",
            "https://10.10.20.1:8443/axl/",
            "--username",
            "axladmin",
            "--password",
            "secret",
            "--no-users",
            "--insecure",
        ]);

        let settings = cli.into_settings().unwrap();
        assert_eq!(settings.connection.endpoint, "https://10.10.20.1:8443/axl/");
        assert_eq!(settings.connection.timeout, Duration::from_secs(10));
        assert!(settings.connection.insecure);
        assert!(settings.report.include_phones);
        assert!(!settings.report.include_users);
        assert!(settings.report.include_directory_numbers);
        assert!(!settings.color);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_endpoint_is_a_config_error() {
        let err = bare_cli().into_settings().unwrap_err();
        assert!(matches!(err, GatorError::ConfigError { .. }));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let mut cli = bare_cli();
        cli.config = Some("/nonexistent/cm-gator.toml".to_string());
        let err = cli.into_settings().unwrap_err();
        assert!(matches!(err, GatorError::ConfigError { .. }));
    }
}
