pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{ConnectionSettings, Settings};

pub use adapters::AxlClient;
pub use crate::core::{render, LocationReportBuilder};
pub use domain::model::{DirectoryNumber, LocationReport, Phone, ReportOptions, User};
pub use domain::ports::TelephonyDirectory;
pub use utils::error::{GatorError, Result};
