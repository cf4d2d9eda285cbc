//! Responsibility classification
//!
//! Keyword heuristics deciding whether a finding belongs to the application
//! team or to the platform team. Developer keywords are checked first and win
//! over DevOps keywords when both occur.

use super::types::{Finding, Responsibility};

/// Keywords pointing at the application: images, probes, containers
pub const DEVELOPER_KEYWORDS: &[&str] = &[
    "image",
    "readiness",
    "liveness",
    "probe",
    "http",
    "container",
    "crash",
    "application",
    "404",
];

/// Keywords pointing at the platform: scheduling, networking, quotas, access
pub const DEVOPS_KEYWORDS: &[&str] = &[
    "node",
    "network",
    "quota",
    "scheduler",
    "affinity",
    "taint",
    "resource",
    "rbac",
    "permission",
    "oomkilled",
];

/// Classify free text. Case-insensitive substring match.
pub fn classify(text: &str) -> Responsibility {
    let text = text.to_lowercase();

    if DEVELOPER_KEYWORDS.iter().any(|k| text.contains(k)) {
        Responsibility::Developer
    } else if DEVOPS_KEYWORDS.iter().any(|k| text.contains(k)) {
        Responsibility::DevOps
    } else {
        Responsibility::Unknown
    }
}

/// All error texts of a finding plus its details, as one blob
pub fn finding_text(finding: &Finding) -> String {
    finding
        .error
        .iter()
        .map(|e| e.text.as_str())
        .chain(finding.details.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify a finding by its combined text
pub fn classify_finding(finding: &Finding) -> Responsibility {
    classify(&finding_text(finding))
}
