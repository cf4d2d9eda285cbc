//! Analyze request and response contracts

use super::aggregate::{aggregate, filter_by_pod};
use super::types::{AnalysisResult, ResponsibilitySummary};
use crate::error::{HealError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error message returned when analyzer stdout is not JSON
pub const PARSE_FAILURE: &str = "Failed to parse k8sgpt output as JSON";

/// Analysis text when a list result has no entry for the pod
pub const NO_POD_ANALYSIS: &str = "No analysis found for the pod";

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub pod_name: String,
    pub namespace: String,
}

impl AnalyzeRequest {
    pub fn validate(&self) -> Result<()> {
        if self.pod_name.trim().is_empty() {
            return Err(HealError::Validation("pod_name must not be empty".to_string()));
        }
        if self.namespace.trim().is_empty() {
            return Err(HealError::Validation("namespace must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Body returned by `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Report {
        pod: String,
        analysis: Value,
        responsibility_summary: Option<ResponsibilitySummary>,
    },
    /// Analyzer succeeded but printed something other than JSON
    Unparsed { error: String, raw_output: String },
}

impl AnalyzeResponse {
    /// Shape an analyzer result for one pod
    pub fn for_pod(pod_name: &str, result: AnalysisResult) -> Self {
        let result = match result {
            AnalysisResult::Unparsed(raw_output) => {
                return AnalyzeResponse::Unparsed {
                    error: PARSE_FAILURE.to_string(),
                    raw_output,
                };
            }
            AnalysisResult::List(items) => {
                let matching = filter_by_pod(&items, pod_name);
                if matching.is_empty() {
                    return AnalyzeResponse::Report {
                        pod: pod_name.to_string(),
                        analysis: Value::String(NO_POD_ANALYSIS.to_string()),
                        responsibility_summary: None,
                    };
                }
                AnalysisResult::List(matching)
            }
            other => other,
        };

        let aggregation = aggregate(&result);
        AnalyzeResponse::Report {
            pod: pod_name.to_string(),
            analysis: aggregation.filtered_output,
            responsibility_summary: aggregation.responsibility_summary,
        }
    }
}
