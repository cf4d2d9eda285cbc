//! Model-serving backends

use super::types::ModelSummary;
use crate::error::{HealError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::Value;
use tracing::debug;

/// A model-serving API the chat proxy can talk to
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Send a vendor-specific JSON body to a model and return its JSON reply
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value>;

    /// Every foundation model the backend offers
    async fn list_models(&self) -> Result<Vec<ModelSummary>>;
}

/// AWS Bedrock, using the default credential chain
pub struct BedrockBackend {
    runtime: aws_sdk_bedrockruntime::Client,
    control: aws_sdk_bedrock::Client,
}

impl BedrockBackend {
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        Self {
            runtime: aws_sdk_bedrockruntime::Client::new(&config),
            control: aws_sdk_bedrock::Client::new(&config),
        }
    }
}

#[async_trait]
impl ModelBackend for BedrockBackend {
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value> {
        debug!(model_id, "Invoking Bedrock model");

        let output = self
            .runtime
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(serde_json::to_vec(body)?))
            .send()
            .await
            .map_err(|e| match e.into_service_error() {
                InvokeModelError::AccessDeniedException(denied) => {
                    HealError::AccessDenied(denied.to_string())
                }
                other => HealError::Upstream(DisplayErrorContext(&other).to_string()),
            })?;

        Ok(serde_json::from_slice(output.body().as_ref())?)
    }

    async fn list_models(&self) -> Result<Vec<ModelSummary>> {
        let output = self
            .control
            .list_foundation_models()
            .send()
            .await
            .map_err(|e| HealError::Upstream(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .model_summaries()
            .iter()
            .map(|m| ModelSummary {
                id: m.model_id().to_string(),
                name: m.model_name().unwrap_or_default().to_string(),
                provider: m.provider_name().unwrap_or_default().to_string(),
            })
            .collect())
    }
}
