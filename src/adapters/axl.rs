//! Reqwest-backed AXL client.
//!
//! One `AxlClient` wraps one authenticated HTTP session against the AXL
//! endpoint; construct it once and inject it wherever a
//! `TelephonyDirectory` is needed.

use crate::adapters::soap::{self, AXL_VERSION};
use crate::config::ConnectionSettings;
use crate::domain::model::{DirectoryNumber, Phone, User};
use crate::domain::ports::TelephonyDirectory;
use crate::utils::error::{GatorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;

pub struct AxlClient {
    http: Client,
    endpoint: String,
    username: String,
    password: String,
}

impl AxlClient {
    pub fn new(settings: ConnectionSettings) -> Result<Self> {
        let mut builder = Client::builder().timeout(settings.timeout);
        if settings.insecure {
            tracing::warn!("TLS certificate validation disabled (--insecure)");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            endpoint: settings.endpoint,
            username: settings.username,
            password: settings.password,
        })
    }

    async fn list(
        &self,
        operation: &str,
        search_criteria: &[(&str, &str)],
        returned_tags: &[&str],
        record_tag: &str,
    ) -> Result<Vec<HashMap<String, String>>> {
        let body = soap::build_list_request(operation, search_criteria, returned_tags)?;
        tracing::debug!("POST {} ({})", self.endpoint, operation);

        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"CUCM:DB ver={} {}\"", AXL_VERSION, operation))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // AXL reports failures as SOAP faults inside non-2xx bodies.
            if let Err(fault @ GatorError::SoapFault { .. }) =
                soap::parse_list_response(&text, record_tag)
            {
                return Err(fault);
            }
            return Err(GatorError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        soap::parse_list_response(&text, record_tag)
    }
}

fn field(record: &mut HashMap<String, String>, name: &str) -> String {
    record.remove(name).unwrap_or_default()
}

#[async_trait]
impl TelephonyDirectory for AxlClient {
    async fn list_directory_numbers(&self, description_mask: &str) -> Result<Vec<DirectoryNumber>> {
        let records = self
            .list(
                "listLine",
                &[("description", description_mask)],
                &["pattern", "description"],
                "line",
            )
            .await?;

        Ok(records
            .into_iter()
            .map(|mut r| DirectoryNumber {
                pattern: field(&mut r, "pattern"),
                description: r.remove("description"),
            })
            .collect())
    }

    async fn list_phones_by_description(&self, description: &str) -> Result<Vec<Phone>> {
        let mask = format!("%{}%", description);
        let records = self
            .list(
                "listPhone",
                &[("description", &mask)],
                &["name", "description", "devicePoolName"],
                "phone",
            )
            .await?;

        Ok(records
            .into_iter()
            .map(|mut r| Phone {
                name: field(&mut r, "name"),
                description: field(&mut r, "description"),
                device_pool: field(&mut r, "devicePoolName"),
            })
            .collect())
    }

    async fn list_users_by_name(&self, first_name: &str, last_name: &str) -> Result<Vec<User>> {
        let first_mask = format!("%{}%", first_name);
        let last_mask = format!("%{}%", last_name);
        let records = self
            .list(
                "listUser",
                &[("firstName", &first_mask), ("lastName", &last_mask)],
                &["userid", "firstName", "lastName"],
                "user",
            )
            .await?;

        Ok(records
            .into_iter()
            .map(|mut r| User {
                user_id: field(&mut r, "userid"),
                first_name: field(&mut r, "firstName"),
                last_name: field(&mut r, "lastName"),
            })
            .collect())
    }
}
