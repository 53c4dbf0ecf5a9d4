use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use customer_profile::{CustomerStore, Server, api, config::Config, health};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "customer_profile=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    let config = Config::parse();

    // Owned here for the life of the process; routes hold clones of the Arc.
    let store = Arc::new(CustomerStore::seeded());
    let app = api::routes(store);

    let server = Server::bind(config.listen_addr()).await?;
    tracing::info!(
        url = %format!("http://localhost:{}", server.local_addr()?.port()),
        endpoints = ?health::ENDPOINTS,
        "{} starting",
        health::SERVICE_NAME
    );

    server.serve(app).await?;
    Ok(())
}
