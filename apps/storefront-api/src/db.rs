//! MongoDB connection bootstrap

use core_config::mongodb::MongoConfig;
use mongodb::{options::ClientOptions, Client};
use std::time::Duration;
use tracing::{info, warn};

/// Connect to MongoDB, verifying the connection with a lightweight call.
pub async fn connect(config: &MongoConfig) -> eyre::Result<Client> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .list_database_names()
        .await
        .map_err(|e| eyre::eyre!("MongoDB connection check failed: {}", e))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect with a bounded number of retries and exponential backoff,
/// for transient network trouble during startup. `max_retries` counts
/// attempts after the first.
pub async fn connect_with_retry(config: &MongoConfig, max_retries: u32) -> eyre::Result<Client> {
    let mut delay = Duration::from_millis(200);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match connect(config).await {
            Ok(client) => return Ok(client),
            Err(e) if attempt <= max_retries => {
                warn!(
                    "MongoDB connection attempt {} failed: {}. Retrying in {:?}",
                    attempt, e, delay
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
