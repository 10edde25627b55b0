use anyhow::Result;
use chrono::NaiveDate;
use httpmock::prelude::*;
use std::io::Write;
use store_relay::core::relay::load_batch;
use store_relay::{
    InMemoryStoreGateway, ProcessedAgentData, RelayEngine, StoreApiAdapter, StoreGateway,
};
use tempfile::NamedTempFile;

fn record(id: &str, value: f64) -> ProcessedAgentData {
    ProcessedAgentData::new()
        .with_field("id", id)
        .with_field(
            "timestamp",
            NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
        .with_field("value", value)
}

/// File on disk → loader → engine → HTTP adapter → store API.
#[tokio::test]
async fn test_relay_batch_file_to_store() -> Result<()> {
    let mut batch_file = NamedTempFile::new()?;
    batch_file.write_all(
        br#"[
            {"id": "a1", "timestamp": "2023-01-01T00:00:00", "value": 3.2},
            {"id": "a2", "timestamp": "2023-01-01T00:00:05", "value": 4.5}
        ]"#,
    )?;

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/processed_agent_data")
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "a1", "timestamp": "2023-01-01T00:00:00", "value": 3.2},
                {"id": "a2", "timestamp": "2023-01-01T00:00:05", "value": 4.5}
            ]));
        then.status(200);
    });

    let batch = load_batch(batch_file.path())?;
    assert_eq!(batch.len(), 2);

    let engine = RelayEngine::new(StoreApiAdapter::new(server.base_url()));
    let saved = engine.run(&batch).await?;

    api_mock.assert();
    assert!(saved);
    Ok(())
}

#[tokio::test]
async fn test_relay_reports_store_rejection() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/processed_agent_data");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "db down"}));
    });

    let engine = RelayEngine::new(StoreApiAdapter::new(server.base_url()));
    let saved = engine.run(&[record("a1", 3.2)]).await?;

    api_mock.assert();
    assert!(!saved);
    Ok(())
}

#[tokio::test]
async fn test_empty_batch_never_reaches_the_store() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/processed_agent_data");
        then.status(200);
    });

    let engine = RelayEngine::new(StoreApiAdapter::new(server.base_url()));
    let saved = engine.run(&[]).await?;

    api_mock.assert_hits(0);
    assert!(saved);
    Ok(())
}

/// Gateways are interchangeable behind the trait object.
#[tokio::test]
async fn test_gateways_are_polymorphic() -> Result<()> {
    let batch = vec![record("a1", 3.2)];

    let in_memory = InMemoryStoreGateway::new();
    let gateway: Box<dyn StoreGateway> = Box::new(in_memory.clone());
    assert!(gateway.save_data(&batch).await?);
    assert_eq!(in_memory.saved().await, batch);

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/processed_agent_data");
        then.status(200);
    });

    let gateway: Box<dyn StoreGateway> = Box::new(StoreApiAdapter::new(server.base_url()));
    assert!(gateway.save_data(&batch).await?);
    api_mock.assert();
    Ok(())
}
