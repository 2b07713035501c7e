//! fleetbook-server - web front end for the fleet list

use anyhow::Context as _;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use fleetbook_app::config::Config;
use fleetbook_server::{build_router, AppState};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().with_target(false)).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::load().context("failed to load config")?;
    config.apply_env();
    init_tracing(config.log_json);

    let state = AppState::from_config(&config)?;
    if !state.credentials.login_enabled() {
        warn!("ADMIN_PASSWORD is not set, admin login is disabled");
    }
    if !state.changes.is_configured() {
        warn!("DISCORD_WEBHOOK is not set, change requests will be rejected");
    }

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(
        addr = %listener.local_addr()?,
        data_dir = %config.data_dir().display(),
        "fleetbook-server listening"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}
