use clap::Parser;
use store_relay::config::toml_config::StoreConfig;
use store_relay::core::relay::load_batch;
use store_relay::utils::logger;
use store_relay::utils::validation::{self, Validate};
use store_relay::{CliConfig, InMemoryStoreGateway, RelayEngine, StoreApiAdapter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting store-relay CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // A TOML file, when given, wins over the individual flags.
    let (api_base_url, input_path) = match &cli.config {
        Some(path) => {
            let file = StoreConfig::from_file(path)?;
            file.validate()?;
            (file.store.base_url, file.input.path)
        }
        None => {
            validation::validate_url("api_base_url", &cli.api_base_url)?;
            (cli.api_base_url.clone(), cli.input.clone())
        }
    };

    let batch = load_batch(&input_path)?;
    tracing::info!("Loaded {} records from {}", batch.len(), input_path);

    let saved = if cli.dry_run {
        tracing::info!("Dry run: recording batch in memory");
        RelayEngine::new(InMemoryStoreGateway::new()).run(&batch).await?
    } else {
        RelayEngine::new(StoreApiAdapter::new(api_base_url)).run(&batch).await?
    };

    if saved {
        println!("✅ Saved {} records", batch.len());
    } else {
        eprintln!("❌ Store API rejected the batch");
        std::process::exit(1);
    }

    Ok(())
}
