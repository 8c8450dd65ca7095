//! main.rs: HTTP front end for the zoning feasibility engine.

mod api;
mod config;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = ServerConfig::from_env();

    let app = api::router(&cfg);
    let listener = tokio::net::TcpListener::bind(&cfg.bind)
        .await
        .with_context(|| format!("binding {}", cfg.bind))?;
    info!("Listening on http://{}", cfg.bind);
    if let Some(dir) = &cfg.serve_dir {
        info!("Serving static files from {dir}");
    }

    let serve = axum::serve(listener, app);
    tokio::select! {
        r = serve => { r.context("HTTP server stopped")?; },
        _ = signal::ctrl_c() => { info!("Shutdown signal received"); }
    }

    Ok(())
}
