pub mod description;
pub mod render;
pub mod report;

pub use crate::domain::model::{
    DirectoryNumber, LocationReport, NamePair, Phone, ReportOptions, User,
};
pub use crate::domain::ports::TelephonyDirectory;
pub use crate::utils::error::Result;
pub use report::LocationReportBuilder;
