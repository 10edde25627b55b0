pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "store-relay")]
#[command(about = "Relay processed agent data batches to the Store API")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8000")]
    pub api_base_url: String,

    #[arg(long, default_value = "./processed_agent_data.json")]
    pub input: String,

    #[arg(long, help = "Load base URL and input path from a TOML file instead")]
    pub config: Option<String>,

    #[arg(long, help = "Record the batch in memory instead of calling the Store API")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
