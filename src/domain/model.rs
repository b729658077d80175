/// A directory number (line) as returned by the AXL `listLine` operation.
/// The description is free text; site conventions encode a location prefix
/// and optionally a person name (see `core::description`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNumber {
    pub pattern: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub name: String,
    pub description: String,
    pub device_pool: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A (first, last) name extracted from a directory-number description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub first: String,
    pub last: String,
}

/// Everything known about one inferred location: the directory numbers that
/// named it, plus the phones and users resolved from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationReport {
    pub location: String,
    pub phones: Vec<Phone>,
    pub users: Vec<User>,
    pub directory_numbers: Vec<DirectoryNumber>,
}

/// Which sections of the report to fetch and include. Everything is included
/// unless the caller opts out.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub include_phones: bool,
    pub include_users: bool,
    pub include_directory_numbers: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_phones: true,
            include_users: true,
            include_directory_numbers: true,
        }
    }
}
