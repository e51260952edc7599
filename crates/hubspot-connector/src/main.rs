//! HubSpot Connector - Entry Point

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hubspot_connector::{
    HubSpotClient,
    config::Config,
    server::IntegrationServer,
    store::{KeyValueStore, MemoryStore, RedisStore},
};

#[derive(Parser, Debug)]
#[command(name = "hubspot-connector")]
#[command(about = "HubSpot OAuth connector and contact loader")]
#[command(version)]
struct Cli {
    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Redis URL for shared state (in-memory store when unset)
    #[arg(long, env = "REDIS_URL")]
    redis_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

async fn open_store(redis_url: Option<&str>) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    if let Some(url) = redis_url {
        let store: Arc<dyn KeyValueStore> = Arc::new(RedisStore::connect(url).await?);
        return Ok(store);
    }

    tracing::warn!("REDIS_URL not set; using in-memory store (single instance only)");
    let memory = Arc::new(MemoryStore::new());
    Arc::clone(&memory).start_cleanup_task();
    let store: Arc<dyn KeyValueStore> = memory;
    Ok(store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting HubSpot connector");

    let config = Config::from_env()?;
    tracing::info!(?config, "Loaded configuration");

    let client = HubSpotClient::new(&config)?;
    let store = open_store(cli.redis_url.as_deref()).await?;
    let server = IntegrationServer::new(&config, client, store);

    server.run_http(cli.port).await
}
