//! Statuswatch poller binary.
//!
//! Runs a single poll cycle and exits, non-zero on failure. Meant to be
//! invoked from cron or an equivalent scheduler.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use statuswatch_poller::{N8nClient, N8nConfig, Poller, PollerConfig};
use statuswatch_store::{SupabaseConfig, SupabaseStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,statuswatch_poller=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    tracing::info!("Starting statuswatch poller");

    // Load configuration
    let n8n_config = N8nConfig::from_env().context("N8N_* configuration is incomplete")?;
    let supabase_config =
        SupabaseConfig::from_env().context("SUPABASE_* configuration is incomplete")?;
    let poller_config = PollerConfig::from_env().context("Poller configuration is invalid")?;
    tracing::info!(
        api_url = %n8n_config.api_url(),
        tool_name = %poller_config.tool_name,
        "Poller configuration loaded"
    );

    // Run one cycle
    let n8n = N8nClient::new(&n8n_config);
    let store = Arc::new(SupabaseStore::new(&supabase_config));
    let poller = Poller::new(n8n, store, &poller_config);

    poller.run_cycle().await.context("Poll cycle aborted")?;

    tracing::info!("Poller finished");
    Ok(())
}
