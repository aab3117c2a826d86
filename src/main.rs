use std::sync::Arc;

use anyhow::Context;
use diabetes_shield::server;
use diabetes_shield::{
    AssetLoader, FsAssetSource, PredictionService, ServiceConfig,
};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::from_env().context("Invalid service configuration")?;
    let paths = config
        .asset_paths_for_executable()
        .context("Cannot resolve asset locations")?;
    info!("Reading model assets from {}", paths.model.display());

    let threshold = config.decision_threshold()?;
    info!("Decision threshold: {}", threshold.value());

    let service = Arc::new(PredictionService::new(
        AssetLoader::new(FsAssetSource::new(paths)),
        threshold,
    ));

    if config.eager_load {
        service
            .loader()
            .ensure_loaded()
            .await
            .context("Failed to load model assets")?;
    }

    let app = server::router(Arc::clone(&service));
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Diabetes prediction API listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
