use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatorError {
    #[error("AXL request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("AXL response parse error: {message}")]
    XmlError { message: String },

    #[error("AXL fault: {message}")]
    SoapFault { message: String },

    #[error("Unexpected HTTP status {status} from AXL endpoint")]
    UnexpectedStatus { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GatorError>;
