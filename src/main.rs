//! Barbershop site server
//!
//! Reads the YAML file named by `BARBERSHOP_CONFIG`; without it the site
//! starts with a small demo catalog and no staff accounts.

use anyhow::Result;
use barbershop::config::{AppConfig, CONFIG_ENV_VAR};
use barbershop::server::ServerBuilder;
use barbershop::storage::ShopStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("barbershop=info,tower_http=info")),
        )
        .init();

    let config = match std::env::var(CONFIG_ENV_VAR) {
        Ok(_) => AppConfig::from_env()?,
        Err(_) => {
            tracing::warn!("{} not set, starting with the demo catalog", CONFIG_ENV_VAR);
            AppConfig::demo()
        }
    };
    if config.staff.is_empty() {
        tracing::warn!("no staff accounts configured, the order desk is unreachable");
    }

    let store = ShopStore::in_memory();
    store.seed_catalog(&config.catalog).await?;

    tracing::info!(site = %config.site.name, "starting barbershop");

    ServerBuilder::new()
        .with_config(config)
        .with_store(store)
        .serve()
        .await
}
