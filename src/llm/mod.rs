//! Chat-completion proxy
//!
//! Normalizes one chat request shape onto the Titan, Nova and Claude
//! envelopes served by Bedrock.

pub mod backend;
pub mod format;
pub mod types;

pub use backend::{BedrockBackend, ModelBackend};
pub use format::{build_request_body, extract_reply};
pub use types::*;

use crate::error::{HealError, Result};
use std::sync::Arc;
use tracing::warn;

/// Answer served instead of an access-denied error in demo mode
pub const DEMO_RESPONSE: &str = "I can help you with Kubernetes troubleshooting! Here are some common steps to debug issues:

1. **Check pod status**: `kubectl get pods -n <namespace>`
2. **View pod logs**: `kubectl logs <pod-name> -n <namespace>`
3. **Describe pod**: `kubectl describe pod <pod-name> -n <namespace>`
4. **Check events**: `kubectl get events -n <namespace>`

For your specific issue, could you share:
- The pod name and namespace
- Any error messages you're seeing
- The current pod status

This will help me provide more targeted assistance!";

/// Chat proxy over a model backend
#[derive(Clone)]
pub struct ChatService {
    backend: Arc<dyn ModelBackend>,
    demo_mode: bool,
}

impl ChatService {
    pub fn new(backend: Arc<dyn ModelBackend>, demo_mode: bool) -> Self {
        Self { backend, demo_mode }
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let body = build_request_body(request)?;
        let family = ModelFamily::from_model_id(&request.model);

        let reply = match self.backend.invoke(&request.model, &body).await {
            Ok(reply) => reply,
            Err(HealError::AccessDenied(msg)) if self.demo_mode => {
                warn!(model = %request.model, "Access denied ({}), serving demo response", msg);
                return Ok(ChatResponse {
                    response: DEMO_RESPONSE.to_string(),
                    model: request.model.clone(),
                });
            }
            Err(e) => {
                return Err(HealError::Upstream(format!("Error calling Bedrock: {}", e)));
            }
        };

        let response = extract_reply(family, &reply).ok_or_else(|| {
            HealError::Upstream("No response content from Bedrock".to_string())
        })?;

        Ok(ChatResponse {
            response,
            model: request.model.clone(),
        })
    }

    /// Anthropic and Amazon models only
    pub async fn list_models(&self) -> Result<ModelList> {
        let models = self
            .backend
            .list_models()
            .await
            .map_err(|e| HealError::Upstream(format!("Error fetching models: {}", e)))?
            .into_iter()
            .filter(|m| is_listed_provider(&m.provider))
            .collect();

        Ok(ModelList { models })
    }
}

pub fn is_listed_provider(provider: &str) -> bool {
    let provider = provider.to_lowercase();
    provider.contains("anthropic") || provider.contains("amazon")
}
