//! teamkeys - Sync an SSH authorized_keys file with GitHub team members' keys

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod sync;

use cli::Cli;
use client::GitHubClient;
use config::Config;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::from_cli(&cli)?;
    let client = GitHubClient::new(&config.access_token, &config.api_url)?;

    sync::run(&client, &config).await?;
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging(debug: bool) {
    let default_filter = if debug { "teamkeys=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
