use anyhow::Context;
use clap::Parser;
use influencer_dashboard::{load_csv, DashboardServer, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "influencer-dashboard", version, about = "Social Influencer Dashboard server")]
struct Args {
    /// CSV file with the influencer roster
    #[arg(long, env = "DASHBOARD_DATA", default_value = influencer_dashboard::config::DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Bind address
    #[arg(long, env = "DASHBOARD_ADDRESS", default_value = "127.0.0.1")]
    address: String,

    /// Port
    #[arg(long, env = "DASHBOARD_PORT", default_value_t = 8050)]
    port: u16,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            address: args.address,
            port: args.port,
            data_path: args.data,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from(Args::parse());

    println!("Influencer Dashboard v{}", influencer_dashboard::version());
    println!("==========================================");

    let dataset = load_csv(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;

    println!("✓ Loaded {} influencers", dataset.len());

    let server = DashboardServer::new(config, Arc::new(dataset));
    server.start().await.context("dashboard server failed")?;

    Ok(())
}
