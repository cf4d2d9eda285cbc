//! Server commands

use crate::cli::{ChatProxyArgs, ServeArgs};
use crate::config::AppConfig;
use crate::error::Result;
use crate::llm::{BedrockBackend, ChatService};
use crate::web::handlers::AppState;
use crate::web::{start_chat_server, start_diagnostics_server};
use std::net::SocketAddr;
use std::sync::Arc;

/// Run the diagnostics API until the process is stopped
pub async fn serve(context: Option<&str>, config: AppConfig, args: &ServeArgs) -> Result<()> {
    let state = AppState::new(context, config).await?;
    start_diagnostics_server(SocketAddr::new(args.bind, args.port), state).await
}

/// Run the chat proxy until the process is stopped
pub async fn chat_proxy(config: AppConfig, args: &ChatProxyArgs) -> Result<()> {
    let backend = BedrockBackend::new(&config.bedrock_region).await;
    let service = ChatService::new(Arc::new(backend), config.demo_mode);
    start_chat_server(SocketAddr::new(args.bind, args.port), service).await
}
