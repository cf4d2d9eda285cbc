//! Diagnostics types and structures

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A pod as reported by `GET /pods`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodRecord {
    pub name: String,
    pub namespace: String,
}

/// Readiness partition of the pods in one namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodHealth {
    pub healthy: Vec<PodRecord>,
    pub unhealthy: Vec<PodRecord>,
}

impl PodHealth {
    pub fn total(&self) -> usize {
        self.healthy.len() + self.unhealthy.len()
    }
}

/// Who is expected to act on a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Responsibility {
    /// Application code, images, probes
    Developer,
    /// Platform: nodes, networking, quotas, RBAC
    DevOps,
    Unknown,
}

impl fmt::Display for Responsibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Responsibility::Developer => write!(f, "Developer"),
            Responsibility::DevOps => write!(f, "DevOps"),
            Responsibility::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Count of findings per responsibility label. Labels that never occurred
/// are absent rather than zero.
pub type ResponsibilitySummary = BTreeMap<Responsibility, usize>;

/// One entry of a finding's `error` list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorText {
    #[serde(rename = "Text", default)]
    pub text: String,
    /// Analyzer fields we pass through untouched (KubernetesDoc, Sensitive, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra: Map::new(),
        }
    }
}

/// A single analyzer finding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub error: Vec<ErrorText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Assigned by classification, never present in raw analyzer output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<Responsibility>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Finding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_error(mut self, text: impl Into<String>) -> Self {
        self.error.push(ErrorText::new(text));
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The `{"results": [...]}` document k8sgpt emits with `--output json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredOutput {
    pub results: Vec<Finding>,
    /// provider, status, problems, errors
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Analyzer output, normalized at the process boundary
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    /// A bare JSON string
    Text(String),
    /// Legacy flat list of findings
    List(Vec<Value>),
    /// Mapping with a `results` sequence
    Structured(StructuredOutput),
    /// Stdout was not valid JSON
    Unparsed(String),
    /// Any other JSON shape
    Other(Value),
}

impl AnalysisResult {
    /// Short variant name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisResult::Text(_) => "text",
            AnalysisResult::List(_) => "list",
            AnalysisResult::Structured(_) => "structured",
            AnalysisResult::Unparsed(_) => "unparsed",
            AnalysisResult::Other(_) => "other",
        }
    }
}
