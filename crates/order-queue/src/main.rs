use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use order_queue::api::{self, AppState};
use order_queue::config::Config;
use order_queue::lifecycle::OrderSystem;
use order_queue::DEFAULT_LOG_FILTER;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing(DEFAULT_LOG_FILTER);

    let config = Config::from_env()?;
    info!(?config, "Starting order queue");

    let system = OrderSystem::new(config.actor_buffer);
    if config.seed_sample_orders {
        system.seed_sample_orders().await?;
    }

    let app = api::router(AppState::new(
        system.order_client.clone(),
        config.visible_orders,
    ));
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
