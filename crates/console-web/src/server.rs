//! Shell server for the likes console using Axum
//!
//! Serves the HTML shell that boots the WASM client, plus a health
//! endpoint. The GraphQL backend itself is external; the shell advertises
//! its endpoint to the client through a meta tag in the served page.

use anyhow::{Context, Result};
use axum::{response::IntoResponse, routing::get, Router};
use http::{HeaderValue, StatusCode};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Application state for the shell server
#[derive(Clone, Debug)]
pub struct ServerState {
    /// GraphQL backend endpoint advertised to the client
    pub graphql_endpoint: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ServerState {
    /// Create new server state with configuration
    #[must_use]
    pub fn new(graphql_endpoint: String) -> Self {
        Self {
            graphql_endpoint,
            request_timeout: 30,
        }
    }

    /// Create state from environment variables with defaults
    pub fn from_env() -> Self {
        let graphql_endpoint = std::env::var("LIKEIT_GRAPHQL_ENDPOINT")
            .unwrap_or_else(|_| crate::DEFAULT_GRAPHQL_ENDPOINT.to_string());

        Self::new(graphql_endpoint)
    }
}

/// Bind address from the environment, with the usual default.
#[must_use]
pub fn bind_from_env() -> String {
    std::env::var("LIKEIT_CONSOLE_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Build the Axum router with all middleware and routes
#[must_use]
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
        .allow_headers([
            http::header::CONTENT_TYPE,
            http::header::ACCEPT,
            http::header::AUTHORIZATION,
        ])
        .max_age(Duration::from_secs(86400));

    Router::new()
        .route("/api/health", get(health_check))
        .fallback({
            let state = state.clone();
            move || async move { shell_handler(state).await }
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.request_timeout,
        )))
}

/// Serve the HTML shell the WASM client mounts into
async fn shell_handler(state: Arc<ServerState>) -> impl IntoResponse {
    let mut response = (StatusCode::OK, generate_html(&state.graphql_endpoint)).into_response();
    let headers = response.headers_mut();
    headers.insert(
        "Content-Type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    response
}

/// Generate HTML for the application. The GraphQL endpoint rides along in
/// a meta tag the WASM client reads at startup.
fn generate_html(graphql_endpoint: &str) -> String {
    let meta_name = crate::GRAPHQL_ENDPOINT_META;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="{meta_name}" content="{graphql_endpoint}">
    <title>Like It Like This</title>
    <link rel="stylesheet" href="/pkg/likeit-console-web.css">
</head>
<body>
    <div id="app">
        <p>Loading likes console...</p>
    </div>
    <script type="module" src="/pkg/likeit-console-web.js"></script>
</body>
</html>"#
    )
}

/// Run the server with the given configuration
///
/// # Errors
/// Returns an error if the server fails to bind to the address or
/// encounters a critical error during operation.
pub async fn run_with_config(bind_address: SocketAddr, graphql_endpoint: String) -> Result<()> {
    let state = Arc::new(ServerState::new(graphql_endpoint));

    let router = build_router(state.clone());

    info!("Starting likes console shell server on {}", bind_address);
    info!("GraphQL endpoint: {}", state.graphql_endpoint);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error occurred")?;

    Ok(())
}

/// Handle shutdown signals gracefully
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    warn!("Received shutdown signal");
    info!("Shutting down server...");
}
