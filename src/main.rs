use anyhow::{Context, Result};
use pitting_modeler::api::create_router;
use pitting_modeler::artifacts::ArtifactBundle;
use pitting_modeler::{Config, PredictionService};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitting_modeler=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::default();

    tracing::info!(
        listen_addr = %config.listen_addr,
        scaler_path = %config.scaler_path,
        model_path = %config.model_path,
        "Starting pitting-modeler service"
    );

    // Load the fitted artifacts before binding the listener; a missing or
    // corrupt artifact must prevent the form from ever being served.
    let artifacts =
        ArtifactBundle::load(&config).context("failed to load fitted artifacts")?;
    let service = PredictionService::new(artifacts);

    let app = create_router(service);

    let addr: SocketAddr = config.listen_addr.parse()?;
    tracing::info!(?addr, "Pitting modeler listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
