//! Aggregation of classified findings

use super::classify::classify_finding;
use super::types::{AnalysisResult, Finding, ResponsibilitySummary};
use serde_json::{json, Value};

/// Message attached to output that had nothing to classify
pub const NO_VALID_RESULTS: &str = "No valid results found in k8sgpt output";

/// Classified view of one analyzer run
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub filtered_output: Value,
    /// `None` when the output was not a structured result set
    pub responsibility_summary: Option<ResponsibilitySummary>,
}

/// Label every finding in place and count the labels
pub fn classify_findings(findings: &mut [Finding]) -> ResponsibilitySummary {
    let mut summary = ResponsibilitySummary::new();
    for finding in findings.iter_mut() {
        let label = classify_finding(finding);
        finding.responsibility = Some(label);
        *summary.entry(label).or_insert(0) += 1;
    }
    summary
}

/// Classify structured output; wrap every other shape in a diagnostic envelope
pub fn aggregate(result: &AnalysisResult) -> Aggregation {
    match result {
        AnalysisResult::Structured(structured) => {
            let mut classified = structured.clone();
            let summary = classify_findings(&mut classified.results);
            Aggregation {
                filtered_output: serde_json::to_value(&classified).unwrap_or(Value::Null),
                responsibility_summary: Some(summary),
            }
        }
        AnalysisResult::Text(text) => unclassified(Value::String(text.clone())),
        AnalysisResult::List(items) => unclassified(Value::Array(items.clone())),
        AnalysisResult::Unparsed(raw) => unclassified(Value::String(raw.clone())),
        AnalysisResult::Other(value) => unclassified(value.clone()),
    }
}

fn unclassified(payload: Value) -> Aggregation {
    Aggregation {
        filtered_output: json!({
            "message": NO_VALID_RESULTS,
            "raw_output": payload,
        }),
        responsibility_summary: None,
    }
}

/// Keep list items whose `name` contains the pod name
pub fn filter_by_pod(items: &[Value], pod_name: &str) -> Vec<Value> {
    items
        .iter()
        .filter(|item| {
            item.get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| name.contains(pod_name))
        })
        .cloned()
        .collect()
}
