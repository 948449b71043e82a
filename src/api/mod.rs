pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::config::ServerConfig;
use crate::store;

use state::AppState;
use types::HealthResponse;

/// Build the HTTP router. Unmatched paths fall through to `static_dir`
/// (with `index.html` as the client-side routing fallback) when one is given.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/health", get(|| async { Json(HealthResponse { status: "ok" }) }))
        .route("/workflows", get(handlers::workflows::list))
        .route(
            "/workflows/{id}",
            get(handlers::workflows::get_one).put(handlers::workflows::put),
        )
        .route("/workflows/{id}/execute", post(handlers::execute::execute))
        .route("/workflows/{id}/validate", post(handlers::validate::validate_workflow))
        .route("/schema", get(handlers::schema::get_schema));

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    app.layer(cors).with_state(state)
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let store = store::open(&config)
        .await
        .with_context(|| format!("opening {:?} store at {}", config.store, config.data_path().display()))?;

    let app = router(AppState::new(store), config.static_dir.as_deref());

    let addr = config.addr();
    info!("tradeflow API server listening on {addr}");
    info!("  Health:   GET  http://{addr}/health");
    info!("  List:     GET  http://{addr}/workflows");
    info!("  Save:     PUT  http://{addr}/workflows/{{id}}");
    info!("  Execute:  POST http://{addr}/workflows/{{id}}/execute");
    if let Some(dir) = &config.static_dir {
        info!("  Frontend: {}", dir.display());
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running server")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
