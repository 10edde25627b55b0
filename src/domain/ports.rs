use crate::domain::model::ProcessedAgentData;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Boundary between domain logic and a concrete store backend.
///
/// Returns `Ok(false)` when the store rejects the batch with a non-success
/// status; serialization and transport faults surface as errors.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    async fn save_data(&self, batch: &[ProcessedAgentData]) -> Result<bool>;
}
