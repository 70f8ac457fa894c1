//! Supabase (PostgREST) implementation of the status store.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::config::SupabaseConfig;
use crate::error::StoreError;
use crate::model::{Service, ServiceUpdateRow, WorkflowStatusRow};
use crate::traits::StatusStore;

/// Registry table the dashboards read.
const SERVICES_TABLE: &str = "services";
/// Table receiving derived workflow health rows.
const UPDATES_TABLE: &str = "updates";
/// Table receiving pushed status rows.
const SERVICE_UPDATES_TABLE: &str = "service_updates";

/// HTTP client for the Supabase REST API.
#[derive(Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    rest_url: String,
    key: String,
}

impl SupabaseStore {
    /// Create a new store client.
    pub fn new(config: &SupabaseConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            rest_url: config.rest_url(),
            key: config.key.clone(),
        }
    }

    fn get(&self, table: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/{}", self.rest_url, table))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    fn post(&self, table: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}/{}", self.rest_url, table))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=representation")
    }

    async fn find_service(&self, column: &str, value: &str) -> Result<Option<Service>, StoreError> {
        let filter = format!("eq.{}", value);
        let response = self
            .get(SERVICES_TABLE)
            .query(&[
                ("select", "id,name"),
                (column, filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let services: Vec<Service> = serde_json::from_str(&body)?;
        Ok(services.into_iter().next())
    }

    async fn insert<T: Serialize>(&self, table: &'static str, row: &T) -> Result<(), StoreError> {
        let response = self.post(table).json(row).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // PostgREST echoes inserted rows under return=representation; an empty
        // array means nothing was written.
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        if rows.is_empty() {
            return Err(StoreError::NoRowsInserted { table });
        }

        tracing::debug!(table, count = rows.len(), "Inserted rows");
        Ok(())
    }
}

#[async_trait]
impl StatusStore for SupabaseStore {
    async fn service_by_id(&self, id: i64) -> Result<Option<Service>, StoreError> {
        self.find_service("id", &id.to_string()).await
    }

    async fn service_by_name(&self, name: &str) -> Result<Option<Service>, StoreError> {
        self.find_service("name", name).await
    }

    async fn record_workflow_status(&self, row: &WorkflowStatusRow) -> Result<(), StoreError> {
        self.insert(UPDATES_TABLE, row).await
    }

    async fn record_service_update(&self, row: &ServiceUpdateRow) -> Result<(), StoreError> {
        self.insert(SERVICE_UPDATES_TABLE, row).await
    }
}
