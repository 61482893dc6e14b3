//! HTTP server for the dashboard page and its API

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use crate::config::ServerConfig;
use crate::dataset::Dataset;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use super::handler::{handles_handler, status_handler, views_handler};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn static_handler() -> Response {
    match Assets::get("index.html") {
        Some(index_html) => {
            Html(String::from_utf8_lossy(index_html.data.as_ref()).into_owned()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "dashboard page not bundled").into_response(),
    }
}

/// Build the router over a read-only dataset
pub fn router(dataset: Arc<Dataset>) -> Router {
    Router::new()
        .route("/", get(static_handler))
        .route("/api/handles", get(handles_handler))
        .route("/api/views/:handle", get(views_handler))
        .route("/api/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .with_state(dataset)
}

/// HTTP server serving the dashboard
pub struct DashboardServer {
    config: ServerConfig,
    dataset: Arc<Dataset>,
}

impl DashboardServer {
    /// Create a new HTTP server
    pub fn new(config: ServerConfig, dataset: Arc<Dataset>) -> Self {
        Self { config, dataset }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(Arc::clone(&self.dataset));

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Dashboard available at http://{}", addr);

        axum::serve(listener, app).await
    }
}
