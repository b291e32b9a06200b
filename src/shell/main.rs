use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use school_activities::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use school_activities::shell::config::Settings;
use school_activities::shell::http::router;
use school_activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    let store = Arc::new(InMemoryActivityStore::seeded());
    let app = router(AppState::in_memory(store, &settings));

    let addr = settings.socket_addr();
    tracing::info!(
        %addr,
        enforce_capacity = settings.enforce_capacity,
        "activities API listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
