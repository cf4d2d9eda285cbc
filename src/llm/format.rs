//! Vendor envelopes for the chat proxy

use super::types::{ChatMessage, ChatRequest, ModelFamily};
use crate::error::{HealError, Result};
use serde_json::{json, Value};

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const TOP_P: f64 = 0.9;

/// Build the `InvokeModel` body for the request's model family
pub fn build_request_body(request: &ChatRequest) -> Result<Value> {
    match ModelFamily::from_model_id(&request.model) {
        ModelFamily::Titan => {
            let prompt = last_prompt(&request.messages)?;
            Ok(json!({
                "inputText": prompt,
                "textGenerationConfig": {
                    "maxTokenCount": request.max_tokens,
                    "temperature": request.temperature,
                    "topP": TOP_P,
                    "stopSequences": [],
                }
            }))
        }
        ModelFamily::Nova => {
            let prompt = last_prompt(&request.messages)?;
            Ok(json!({
                "messages": [{"role": "user", "content": prompt}],
                "max_tokens": request.max_tokens,
                "temperature": request.temperature,
                "top_p": TOP_P,
            }))
        }
        ModelFamily::Claude => claude_body(request),
    }
}

/// Titan and Nova only take one prompt: the last turn after role mapping
fn last_prompt(messages: &[ChatMessage]) -> Result<String> {
    amazon_conversation(messages)
        .pop()
        .map(|m| m.content)
        .ok_or_else(|| HealError::Validation("No messages to send".to_string()))
}

/// Map roles to what the Amazon models understand.
/// System prompts become user turns, assistant becomes `bot`.
pub fn amazon_conversation(messages: &[ChatMessage]) -> Vec<ChatMessage> {
    messages
        .iter()
        .filter_map(|m| match m.role.as_str() {
            "system" => Some(ChatMessage::new("user", format!("System: {}", m.content))),
            "user" => Some(ChatMessage::new("user", m.content.clone())),
            "assistant" => Some(ChatMessage::new("bot", m.content.clone())),
            _ => None,
        })
        .collect()
}

fn claude_body(request: &ChatRequest) -> Result<Value> {
    let messages: Vec<&ChatMessage> = request
        .messages
        .iter()
        .filter(|m| m.role == "user" || m.role == "assistant")
        .collect();

    if messages.is_empty() {
        return Err(HealError::Validation("No messages to send".to_string()));
    }

    let mut body = json!({
        "anthropic_version": ANTHROPIC_VERSION,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
        "messages": messages,
    });

    if let Some(system) = request.messages.iter().find(|m| m.role == "system") {
        body["system"] = Value::String(system.content.clone());
    }

    Ok(body)
}

/// Pull the reply text out of a model response
pub fn extract_reply(family: ModelFamily, response: &Value) -> Option<String> {
    let text = match family {
        ModelFamily::Titan => response.pointer("/results/0/outputText"),
        ModelFamily::Nova | ModelFamily::Claude => response.pointer("/content/0/text"),
    };
    text.and_then(Value::as_str).map(String::from)
}
