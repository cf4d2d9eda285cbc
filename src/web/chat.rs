//! HTTP handlers for the chat proxy

use super::handlers::{ApiError, HealthResponse};
use crate::llm::{ChatRequest, ChatResponse, ChatService, ModelList};
use axum::{extract::State, Json};

pub async fn chat(
    State(service): State<ChatService>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    Ok(Json(service.chat(&request).await?))
}

pub async fn list_models(
    State(service): State<ChatService>,
) -> Result<Json<ModelList>, ApiError> {
    Ok(Json(service.list_models().await?))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "bedrock-api",
    })
}
