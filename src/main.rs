//! Bankweb main entry point

use bankweb_client::{BankingApi, HttpBankClient};
use bankweb_config::Config;
use bankweb_web::start_server;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "bankweb")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web front end for the banking demo service", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let rt = Runtime::new()?;

    rt.block_on(async {
        let config = Config::load(args.config.clone())?;
        log::info!(
            "Config loaded: backend={}, listen={}:{}",
            config.backend_base_url(),
            config.server.host,
            config.server.port
        );

        let client = Arc::new(HttpBankClient::new(&config.backend_base_url()));

        // One startup probe; a failure is tolerated and the UI starts empty
        match client.list_accounts().await {
            Ok(accounts) => log::info!("Backend reachable, {} accounts", accounts.len()),
            Err(e) => log::warn!("Backend not reachable yet: {}", e),
        }

        start_server(config, client).await
    })
}
