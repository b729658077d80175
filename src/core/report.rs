use crate::core::description::{location_of, name_pair_of};
use crate::domain::model::{DirectoryNumber, LocationReport, NamePair, ReportOptions};
use crate::domain::ports::TelephonyDirectory;

/// Builds the per-location report by grouping directory numbers on their
/// inferred location and cross-referencing phones and users through the
/// injected directory port.
///
/// A failed fetch never aborts the build: the failing call is logged and
/// contributes an empty list, and the remaining locations are still
/// processed.
pub struct LocationReportBuilder<'a, D: TelephonyDirectory> {
    directory: &'a D,
    options: ReportOptions,
}

impl<'a, D: TelephonyDirectory> LocationReportBuilder<'a, D> {
    pub fn new(directory: &'a D, options: ReportOptions) -> Self {
        Self { directory, options }
    }

    /// Runs the full build: one directory-number fetch, then one phone query
    /// and one user query per extracted name pair for each location.
    ///
    /// Reports come back in first-encounter order of their location key, one
    /// per distinct key.
    pub async fn build(&self) -> Vec<LocationReport> {
        let dns = match self.directory.list_directory_numbers("%").await {
            Ok(dns) => {
                tracing::debug!("fetched {} directory numbers", dns.len());
                dns
            }
            Err(e) => {
                tracing::warn!("directory number fetch failed: {}", e);
                Vec::new()
            }
        };

        let mut reports = Vec::new();
        for (location, dns) in group_by_location(dns) {
            reports.push(self.build_location(location, dns).await);
        }
        reports
    }

    async fn build_location(
        &self,
        location: String,
        dns: Vec<DirectoryNumber>,
    ) -> LocationReport {
        let phones = if self.options.include_phones {
            match self.directory.list_phones_by_description(&location).await {
                Ok(phones) => {
                    tracing::debug!("fetched {} phones for '{}'", phones.len(), location);
                    phones
                }
                Err(e) => {
                    tracing::warn!("phone fetch for '{}' failed: {}", location, e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let pairs: Vec<NamePair> = dns
            .iter()
            .filter_map(|dn| dn.description.as_deref().and_then(name_pair_of))
            .collect();

        let mut users = Vec::new();
        if self.options.include_users {
            for pair in &pairs {
                match self
                    .directory
                    .list_users_by_name(&pair.first, &pair.last)
                    .await
                {
                    Ok(found) => {
                        tracing::debug!(
                            "fetched {} users for name {} {}",
                            found.len(),
                            pair.first,
                            pair.last
                        );
                        users.extend(found);
                    }
                    Err(e) => {
                        tracing::warn!(
                            "user fetch for name {} {} failed: {}",
                            pair.first,
                            pair.last,
                            e
                        );
                    }
                }
            }
        }

        let directory_numbers = if self.options.include_directory_numbers {
            dns
        } else {
            Vec::new()
        };

        LocationReport {
            location,
            phones,
            users,
            directory_numbers,
        }
    }
}

/// Buckets directory numbers by the location prefix of their description.
/// Records whose description carries no location contribute to no bucket.
/// Buckets keep fetch order; keys keep first-encounter order.
fn group_by_location(dns: Vec<DirectoryNumber>) -> Vec<(String, Vec<DirectoryNumber>)> {
    let mut buckets: Vec<(String, Vec<DirectoryNumber>)> = Vec::new();
    for dn in dns {
        let location = match dn.description.as_deref().and_then(location_of) {
            Some(location) => location.to_string(),
            None => continue,
        };
        match buckets.iter_mut().find(|(key, _)| *key == location) {
            Some((_, bucket)) => bucket.push(dn),
            None => buckets.push((location, vec![dn])),
        }
    }
    buckets
}
