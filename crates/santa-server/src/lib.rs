pub mod error;
pub mod routes;
pub mod state;
pub mod templates;

use axum::routing::get;
use axum::Router;
use santa_core::config::Config;
use santa_core::paths::LINK_PATH_PREFIX;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the axum Router with both pages.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf, config: Arc<Config>) -> Router {
    let app_state = state::AppState::new(root, config);

    Router::new()
        .route("/", get(routes::wrong_link))
        .route(&format!("/{LINK_PATH_PREFIX}/{{id}}"), get(routes::reveal))
        .fallback(routes::wrong_link)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the participant-facing web server.
pub async fn serve(root: PathBuf, config: Arc<Config>, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Amic Invisible listening on http://localhost:{port}");

    axum::serve(listener, build_router(root, config)).await?;
    Ok(())
}

/// Start the server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    config: Arc<Config>,
    listener: tokio::net::TcpListener,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    tracing::info!("Amic Invisible listening on http://localhost:{actual_port}");

    axum::serve(listener, build_router(root, config)).await?;
    Ok(())
}
