use crate::domain::model::ProcessedAgentData;
use crate::domain::ports::StoreGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Gateway variant that keeps batches in memory instead of calling the Store
/// API. Backs the CLI's dry-run mode and doubles as a test gateway.
#[derive(Clone, Default)]
pub struct InMemoryStoreGateway {
    saved: Arc<Mutex<Vec<ProcessedAgentData>>>,
    reject: bool,
}

impl InMemoryStoreGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that refuses every non-empty batch, mimicking a store that
    /// answers with an error status.
    pub fn rejecting() -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            reject: true,
        }
    }

    pub async fn saved(&self) -> Vec<ProcessedAgentData> {
        self.saved.lock().await.clone()
    }
}

#[async_trait]
impl StoreGateway for InMemoryStoreGateway {
    async fn save_data(&self, batch: &[ProcessedAgentData]) -> Result<bool> {
        if batch.is_empty() {
            return Ok(true);
        }
        if self.reject {
            return Ok(false);
        }

        let mut saved = self.saved.lock().await;
        saved.extend_from_slice(batch);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accepts_and_records_batches() {
        let gateway = InMemoryStoreGateway::new();
        let batch = vec![
            ProcessedAgentData::new().with_field("id", "a1"),
            ProcessedAgentData::new().with_field("id", "a2"),
        ];

        assert!(gateway.save_data(&batch).await.unwrap());
        assert_eq!(gateway.saved().await, batch);
    }

    #[tokio::test]
    async fn test_empty_batch_is_success_without_recording() {
        let gateway = InMemoryStoreGateway::new();

        assert!(gateway.save_data(&[]).await.unwrap());
        assert!(gateway.saved().await.is_empty());
    }

    #[tokio::test]
    async fn test_rejecting_gateway_returns_false() {
        let gateway = InMemoryStoreGateway::rejecting();
        let batch = vec![ProcessedAgentData::new().with_field("id", "a1")];

        assert!(!gateway.save_data(&batch).await.unwrap());
        assert!(gateway.saved().await.is_empty());
    }
}
