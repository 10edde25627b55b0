pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::memory::InMemoryStoreGateway;
pub use crate::adapters::store_api::StoreApiAdapter;
pub use crate::core::relay::RelayEngine;
pub use crate::domain::model::{FieldValue, ProcessedAgentData};
pub use crate::domain::ports::StoreGateway;
pub use crate::utils::error::{RelayError, Result};
