use kidschat::api::{self, app_state::AppState};
use kidschat::config::loader::ConfigLoader;
use kidschat::observability::{
    AppMetrics, ObservabilityState, create_observability_router, init_tracing,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    init_tracing(&config.app_name, &config.logging);
    ConfigLoader::validate(&config)?;
    info!(
        "Configuration loaded: environment={}, vocabulary={}",
        config.environment, config.chat.vocabulary
    );

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::from_config(&config, metrics.clone());
    info!("Application state created: {:?}", app_state);

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION"),
        metrics,
    ));
    let api_router = api::create_app(app_state, &config.server.cors_origins);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
