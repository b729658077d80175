use crate::domain::model::{DirectoryNumber, Phone, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only query port onto the telephony administration API.
///
/// Masks follow AXL wildcard semantics: `%` matches any run of characters.
/// `list_directory_numbers` takes the mask verbatim; the other two wrap their
/// literal substring arguments in `%...%` themselves.
#[async_trait]
pub trait TelephonyDirectory: Send + Sync {
    async fn list_directory_numbers(&self, description_mask: &str) -> Result<Vec<DirectoryNumber>>;

    async fn list_phones_by_description(&self, description: &str) -> Result<Vec<Phone>>;

    async fn list_users_by_name(&self, first_name: &str, last_name: &str) -> Result<Vec<User>>;
}
