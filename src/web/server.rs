//! Web server implementation using axum

use crate::error::{HealError, Result};
use crate::llm::ChatService;
use crate::web::{chat, handlers};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Routes of the diagnostics API
pub fn diagnostics_router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/pods", get(handlers::get_pods))
        .route("/analyze", post(handlers::analyze))
        .route("/run_kubectl", post(handlers::run_kubectl))
        .route("/health", get(handlers::health))
        .layer(cors())
        .with_state(state)
}

/// Routes of the chat proxy
pub fn chat_router(service: ChatService) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/models", get(chat::list_models))
        .route("/health", get(chat::health))
        .layer(cors())
        .with_state(service)
}

/// Start the diagnostics API
pub async fn start_diagnostics_server(addr: SocketAddr, state: handlers::AppState) -> Result<()> {
    info!(
        namespace = %state.config.namespace,
        analyzer = %state.analyzer.program(),
        "Starting diagnostics API"
    );
    serve(addr, diagnostics_router(state)).await
}

/// Start the chat proxy
pub async fn start_chat_server(addr: SocketAddr, service: ChatService) -> Result<()> {
    if service.demo_mode() {
        tracing::warn!("Demo mode enabled: access-denied errors will be answered with a canned response");
    }
    serve(addr, chat_router(service)).await
}

async fn serve(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("🚀 Listening on http://{}", addr);
    info!("Web server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| HealError::Config(format!("Server error: {}", e)))?;

    Ok(())
}
