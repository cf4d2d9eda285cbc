//! HTTP surface for healops
//!
//! Two routers:
//! - diagnostics: pod health, k8sgpt analysis, allowlisted kubectl
//! - chat proxy: Bedrock chat completions and model listing

pub mod chat;
pub mod handlers;
pub mod server;

pub use server::{chat_router, diagnostics_router, start_chat_server, start_diagnostics_server};
