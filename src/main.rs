use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dev_scheduler::config::AppConfig;
use dev_scheduler::handlers;
use dev_scheduler::state::AppState;
use dev_scheduler::storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.app_password == "devmeetup" {
        tracing::warn!("APP_PASSWORD not set, using the default password");
    }

    let store = storage::from_config(&config)?;
    tracing::info!("using {} storage backend", store.name());

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    let app = handlers::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
