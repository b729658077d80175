use crate::utils::error::{GatorError, Result};
use crate::utils::validation::{validate_non_empty, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration. Everything the command line can set has a
/// counterpart here; flags given on the command line win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub connection: ConnectionConfig,
    pub report: Option<ReportConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub timeout_seconds: Option<u64>,
    pub insecure: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub phones: Option<bool>,
    pub users: Option<bool>,
    pub directory_numbers: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub color: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GatorError::ConfigError {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let expanded = Self::expand_env_vars(&content);
        let config: TomlConfig = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Replaces `${VAR}` placeholders with environment-variable values so
    /// credentials can stay out of the file. Unset variables are left
    /// untouched.
    fn expand_env_vars(content: &str) -> String {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("connection.endpoint", &self.connection.endpoint)?;
        validate_non_empty("connection.username", &self.connection.username)?;
        Ok(())
    }
}
