use axum::{
    Json, Router,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::ui;

/// Build the application router.
///
/// Split out from [`start_server`] so integration tests can drive the
/// router without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/health", get(health))
        .nest_service(
            "/static",
            ServeDir::new(&state.config.server.static_dir),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState {
        config: Arc::clone(&config),
    };

    let timeout_duration = Duration::from_secs(config.server.request_timeout_secs);

    let app = router(state).layer(axum::middleware::from_fn(
        move |req: Request, next: Next| {
            let duration = timeout_duration;
            async move {
                match tokio::time::timeout(duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            }
        },
    ));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - The landing page.
async fn landing() -> Html<String> {
    Html(ui::render_landing())
}

/// GET /health - Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unknown paths.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(ui::render_not_found()))
}
