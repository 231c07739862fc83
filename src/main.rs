use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use portfolio_backend::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let addr = config.server_addr();
    let static_dir = config.static_dir.display().to_string();
    let environment = config.environment;

    let state = Arc::new(AppState::new(config).context("failed to build application state")?);
    let remote_chat = state.responder.has_remote();
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        %static_dir,
        environment = environment.as_str(),
        remote_chat,
        "🚀 Portfolio server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
