//! n8n public API client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::N8nConfig;
use crate::error::PollError;
use crate::model::{ExecutionPage, Workflow, WorkflowList};
use crate::paginate::{ExecutionSource, PAGE_LIMIT};

/// HTTP client for the n8n public API.
#[derive(Clone)]
pub struct N8nClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl N8nClient {
    /// Create a new client.
    pub fn new(config: &N8nConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url: config.api_url(),
            api_key: config.api_key.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, PollError> {
        let response = self
            .client
            .get(format!("{}/{}", self.api_url, endpoint))
            .header("accept", "application/json")
            .header("X-N8N-API-KEY", &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(PollError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| PollError::Contract(e.to_string()))
    }

    /// List workflows, optionally restricted by active state.
    ///
    /// Accepts both listing envelopes (bare array and `{"data": [...]}`)
    /// observed across n8n versions.
    pub async fn workflows(&self, active: Option<bool>) -> Result<Vec<Workflow>, PollError> {
        let mut query = Vec::new();
        if let Some(active) = active {
            query.push(("active", active.to_string()));
        }

        tracing::debug!(active = ?active, "Fetching workflows");

        let list: WorkflowList = self.get_json("workflows", &query).await?;
        Ok(list.into_workflows())
    }
}

#[async_trait]
impl ExecutionSource for N8nClient {
    async fn fetch_page(
        &self,
        workflow_id: &str,
        cursor: Option<&str>,
    ) -> Result<ExecutionPage, PollError> {
        let mut query = vec![
            ("workflowId", workflow_id.to_string()),
            ("limit", PAGE_LIMIT.to_string()),
        ];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        self.get_json("executions", &query).await
    }
}
