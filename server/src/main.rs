use clap::Parser;

use diceware_site::{Result, ServerConfig, ServerError, BUILD};

#[tokio::main]
async fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "diceware=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|err| ServerError::Logging(err.to_string()))?;

    let config = ServerConfig::parse();
    tracing::info!(build = BUILD, "starting diceware-site");

    diceware_site::serve(&config).await
}
