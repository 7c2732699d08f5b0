//! Development server for UI work.
//!
//! Starts the in-memory API stand-in with a seeded store catalog so the
//! admin UI has something to talk to during development. Honors HOST and
//! PORT from the environment (or a .env file); defaults to 127.0.0.1:4000.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::TestApp;
use test_helpers::dataset::DevDataset;
use test_helpers::server::{self, SharedDb};
use test_helpers::telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let db = SharedDb::default();
    let mut config = server::Config::from_env();
    let server = server::build(&mut config, db.clone())?;
    tokio::spawn(server);

    let app = TestApp {
        port: config.port,
        client: payloads::ApiClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        db,
    };
    app.client.health_check().await?;
    info!("API server running on http://{}:{}", config.ip, config.port);

    let dataset = DevDataset::create(&app).await?;
    dataset.print_summary();

    info!(
        "UI: cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        config.port
    );
    info!("Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("Shutting down development server");
    Ok(())
}
