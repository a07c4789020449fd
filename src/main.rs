use std::sync::Arc;

use waypoint::config::Config;
use waypoint::db::{DynStore, MemoryStore, PgStore};
use waypoint::engine::Engine;
use waypoint::error::{unexpected_error, Error};
use waypoint::external::google_maps::GoogleMaps;
use waypoint::external::publisher::{LogPublisher, WebhookPublisher};
use waypoint::external::{DynDirections, DynPublisher};
use waypoint::server::serve;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!("shutting down: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .map_err(unexpected_error)?;

    let store: DynStore = match &config.database_url {
        Some(url) => Arc::new(PgStore::new(url, config.database_max_connections).await?),
        None => {
            tracing::warn!("DATABASE_URL is not set, orders are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    let directions: DynDirections = Arc::new(GoogleMaps::new(
        client.clone(),
        config.google_maps_api_base.clone(),
        config.google_maps_api_key.clone(),
    ));

    let publisher: DynPublisher = match &config.publish_url {
        Some(url) => Arc::new(WebhookPublisher::new(client, url.clone())),
        None => Arc::new(LogPublisher),
    };

    let engine = Engine::new(store, directions, publisher);

    serve(engine, config.listen_addr).await
}
