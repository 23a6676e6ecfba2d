mod config;
mod db;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::services::{account, catalog, persistence};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().expect("configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let mut catalog_state = catalog::load_catalog(&pool).await.expect("catalog load failed");
    if catalog_state.is_empty() && config.seed_defaults {
        catalog::seed_defaults(&mut catalog_state);
    }
    let admin = account::load_account(&pool, &config.admin_password)
        .await
        .expect("admin account load failed");

    let state = state::AppState::new(pool, catalog_state, admin);

    // Spawn background persistence task.
    let persistence_task = persistence::spawn_persistence_task(state.clone(), config.flush_interval_ms);

    let app = routes::app(state.clone()).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "trade-admin listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");

    persistence_task.abort();
    persistence::flush_all_dirty(&state).await;
    tracing::info!("final flush complete");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}
