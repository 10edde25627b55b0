use crate::core::{ProcessedAgentData, Result, StoreGateway};
use std::path::Path;

/// Drives a batch through whichever gateway it was assembled with.
pub struct RelayEngine<G: StoreGateway> {
    gateway: G,
}

impl<G: StoreGateway> RelayEngine<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn run(&self, batch: &[ProcessedAgentData]) -> Result<bool> {
        tracing::info!("Relaying {} processed records", batch.len());

        let saved = self.gateway.save_data(batch).await?;
        if saved {
            tracing::info!("Batch accepted by store");
        } else {
            tracing::warn!("Store rejected the batch");
        }

        Ok(saved)
    }
}

/// Read a batch from a JSON file holding an array of records.
pub fn load_batch<P: AsRef<Path>>(path: P) -> Result<Vec<ProcessedAgentData>> {
    let content = std::fs::read_to_string(path)?;
    let batch = serde_json::from_str(&content)?;
    Ok(batch)
}
