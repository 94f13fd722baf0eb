mod commands;

use std::sync::Arc;

use clap::Parser;

use instalite_client::api::{ApiClient, KeychainTokenStore, MemoryTokenStore, TokenStore};
use instalite_client::ApiConfig;

#[derive(Parser, Debug)]
#[command(name = "instalite", about = "Command-line client for the InstaLite API")]
struct Args {
    /// API origin, overriding INSTALITE_API_URL / VITE_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Keep the session token in memory instead of the system keychain
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() {
    // Load .env from the working directory, if present
    let _ = dotenvy::dotenv();

    env_logger::init();

    let args = Args::parse();

    let config = match args.api_url {
        Some(ref url) => ApiConfig::new(url),
        None => ApiConfig::from_env(),
    };

    let tokens: Arc<dyn TokenStore> = if args.ephemeral {
        Arc::new(MemoryTokenStore::new())
    } else {
        Arc::new(KeychainTokenStore::new())
    };

    let client = match ApiClient::new(&config, tokens) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Using API at {}", client.base_url());

    if let Err(e) = commands::run(&client, args.command).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
