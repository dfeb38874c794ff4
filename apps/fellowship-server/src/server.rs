use crate::config::ServerConfig;
use anyhow::{Context, Result};
use axum::Router;
use member_directory::MemberDirectoryModule;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Mount module routes and wrap them in the HTTP middleware stack
pub fn build_router(module: &MemberDirectoryModule, cfg: &ServerConfig) -> Result<Router> {
    let mut router = module.register_rest(Router::new())?;

    if cfg.timeout_sec > 0 {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(cfg.timeout_sec)));
    }
    if cfg.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    Ok(router.layer(TraceLayer::new_for_http()))
}

/// Serve until Ctrl-C
pub async fn serve(router: Router, cfg: &ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", cfg.host, cfg.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::warn!("Failed to listen for shutdown signal: {}", e),
    }
}
