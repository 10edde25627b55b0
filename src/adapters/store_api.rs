use crate::domain::model::ProcessedAgentData;
use crate::domain::ports::StoreGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

/// Gateway variant that saves batches over HTTP against the Store API.
///
/// Holds only the base URL and a shared client; every call is an independent
/// round trip. No retries, no adapter-level timeout, no pooling beyond what
/// the client does internally.
pub struct StoreApiAdapter {
    api_base_url: String,
    client: Client,
}

impl StoreApiAdapter {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl StoreGateway for StoreApiAdapter {
    async fn save_data(&self, batch: &[ProcessedAgentData]) -> Result<bool> {
        // An empty save is trivially successful; skip the round trip.
        if batch.is_empty() {
            return Ok(true);
        }

        let payload = serde_json::to_string(batch)?;
        tracing::info!("{}", payload);

        let response = self
            .client
            .post(format!("{}/processed_agent_data", self.api_base_url))
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            tracing::info!("Successfully saved");
            return Ok(true);
        }

        let status = response.status();
        let message: serde_json::Value = response.json().await?;
        tracing::warn!(
            "Error occurred while saving agent data. Status code: {}. Message: {}",
            status,
            message
        );
        Ok(false)
    }
}
