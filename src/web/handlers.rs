//! HTTP handlers for the diagnostics API

use crate::client::create_client;
use crate::config::AppConfig;
use crate::diagnostics::exec::run_with_timeout;
use crate::diagnostics::{
    analyze_pod, list_pod_health, AnalyzeRequest, AnalyzeResponse, Analyzer, CommandPolicy,
    CommandRunner, KubePodSource, PodHealth, PodSource, ProcessRunner,
};
use crate::error::{HealError, Result};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
///
/// Built once at startup and never mutated, so handlers share it freely.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pods: Arc<dyn PodSource>,
    pub runner: Arc<dyn CommandRunner>,
    pub analyzer: Analyzer,
    pub policy: CommandPolicy,
}

impl AppState {
    /// State backed by a live cluster and real subprocesses
    pub async fn new(context: Option<&str>, config: AppConfig) -> Result<Self> {
        let client = create_client(context).await?;
        Ok(Self::with_parts(
            config,
            Arc::new(KubePodSource::new(client)),
            Arc::new(ProcessRunner),
        ))
    }

    pub fn with_parts(
        config: AppConfig,
        pods: Arc<dyn PodSource>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            analyzer: Analyzer::from_config(&config),
            policy: CommandPolicy::new(config.allowed_command.clone()),
            config: Arc::new(config),
            pods,
            runner,
        }
    }
}

/// API error response
///
/// Client errors render as `{"error": ...}`, server errors as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<HealError> for ApiError {
    fn from(e: HealError) -> Self {
        let status = match e {
            HealError::Validation(_) | HealError::CommandNotAllowed(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = if self.status.is_client_error() {
            json!({ "error": self.message })
        } else {
            json!({ "detail": self.message })
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Body of `POST /run_kubectl`
#[derive(Debug, Deserialize)]
pub struct RunCommandRequest {
    pub command: String,
}

/// Either `{"output": ...}` or `{"error": ...}`
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunCommandResponse {
    Output(String),
    Error(String),
}

// ============================================================================
// Diagnostics Handlers
// ============================================================================

/// Readiness partition of the configured namespace
pub async fn get_pods(
    State(state): State<AppState>,
) -> std::result::Result<Json<PodHealth>, ApiError> {
    let health = list_pod_health(state.pods.as_ref(), &state.config.namespace).await?;
    Ok(Json(health))
}

/// Run k8sgpt for a pod and classify what it found
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> std::result::Result<Json<AnalyzeResponse>, ApiError> {
    info!(pod = %request.pod_name, namespace = %request.namespace, "Analyze request");
    let response = analyze_pod(&state.analyzer, state.runner.as_ref(), &request).await?;
    Ok(Json(response))
}

/// Run an allowlisted command without a shell
pub async fn run_kubectl(
    State(state): State<AppState>,
    Json(request): Json<RunCommandRequest>,
) -> std::result::Result<Json<RunCommandResponse>, ApiError> {
    let args = state.policy.parse(&request.command)?;

    let result = run_with_timeout(
        state.runner.as_ref(),
        state.policy.program(),
        &args,
        state.config.command_timeout(),
    )
    .await;

    let response = match result {
        Ok(output) if output.success() => RunCommandResponse::Output(output.stdout),
        Ok(output) if !output.stderr.trim().is_empty() => RunCommandResponse::Error(output.stderr),
        Ok(output) => RunCommandResponse::Error(match output.exit_code {
            Some(code) => format!("Command exited with status {}", code),
            None => "Command terminated by signal".to_string(),
        }),
        Err(e) => {
            warn!("Command '{}' failed: {}", request.command, e);
            RunCommandResponse::Error(e.to_string())
        }
    };

    Ok(Json(response))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "healops-diagnostics",
    })
}
