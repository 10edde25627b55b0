pub mod relay;

pub use crate::domain::model::{FieldValue, ProcessedAgentData};
pub use crate::domain::ports::StoreGateway;
pub use crate::utils::error::Result;
