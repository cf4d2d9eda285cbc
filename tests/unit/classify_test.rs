//! Tests for src/diagnostics/classify.rs

use healops::diagnostics::classify::{
    classify, classify_finding, finding_text, DEVELOPER_KEYWORDS, DEVOPS_KEYWORDS,
};
use healops::diagnostics::{Finding, Responsibility};

// ============================================================================
// Keyword tiers
// ============================================================================

#[test]
fn test_every_developer_keyword_matches() {
    for keyword in DEVELOPER_KEYWORDS {
        assert_eq!(
            classify(&format!("found {} trouble", keyword)),
            Responsibility::Developer,
            "keyword {}",
            keyword
        );
    }
}

#[test]
fn test_every_devops_keyword_matches() {
    for keyword in DEVOPS_KEYWORDS {
        assert_eq!(
            classify(&format!("found {} trouble", keyword)),
            Responsibility::DevOps,
            "keyword {}",
            keyword
        );
    }
}

#[test]
fn test_image_pull_is_developer() {
    assert_eq!(
        classify("Back-off pulling image \"nginx:lates\""),
        Responsibility::Developer
    );
}

#[test]
fn test_unschedulable_is_devops() {
    assert_eq!(
        classify("0/3 nodes are available: insufficient memory"),
        Responsibility::DevOps
    );
}

#[test]
fn test_no_keyword_is_unknown() {
    assert_eq!(
        classify("Service has no endpoints, expected label app=web"),
        Responsibility::Unknown
    );
    assert_eq!(classify(""), Responsibility::Unknown);
}

// ============================================================================
// Matching rules
// ============================================================================

#[test]
fn test_developer_wins_over_devops() {
    assert_eq!(
        classify("crash after rbac change"),
        Responsibility::Developer
    );
    assert_eq!(
        classify("container was OOMKilled on node-1"),
        Responsibility::Developer
    );
}

#[test]
fn test_case_insensitive() {
    assert_eq!(classify("LIVENESS PROBE FAILED"), Responsibility::Developer);
    assert_eq!(classify("Last state: OOMKilled"), Responsibility::DevOps);
    assert_eq!(classify("RBAC denied"), Responsibility::DevOps);
}

#[test]
fn test_substring_inside_word_matches() {
    assert_eq!(classify("ImagePullBackOff"), Responsibility::Developer);
    assert_eq!(classify("CrashLoopBackOff"), Responsibility::Developer);
    assert_eq!(classify("Taints prevent placement"), Responsibility::DevOps);
}

#[test]
fn test_deterministic() {
    let text = "exceeded quota: compute-resources";
    assert_eq!(classify(text), classify(text));
    assert_eq!(classify(text), Responsibility::DevOps);
}

// ============================================================================
// Findings
// ============================================================================

#[test]
fn test_finding_text_joins_errors_and_details() {
    let finding = Finding::new("app/web-1")
        .with_error("first")
        .with_error("second")
        .with_details("explanation");
    assert_eq!(finding_text(&finding), "first second explanation");
}

#[test]
fn test_finding_text_without_details() {
    let finding = Finding::new("app/web-1").with_error("only error");
    assert_eq!(finding_text(&finding), "only error");
}

#[test]
fn test_classify_finding_uses_details() {
    let finding = Finding::new("app/web-1")
        .with_error("pod is pending")
        .with_details("The scheduler could not find a fit");
    assert_eq!(classify_finding(&finding), Responsibility::DevOps);
}

#[test]
fn test_classify_finding_error_beats_details() {
    let finding = Finding::new("app/web-1")
        .with_error("readiness failing")
        .with_details("check the network policy");
    assert_eq!(classify_finding(&finding), Responsibility::Developer);
}

#[test]
fn test_responsibility_display() {
    assert_eq!(Responsibility::Developer.to_string(), "Developer");
    assert_eq!(Responsibility::DevOps.to_string(), "DevOps");
    assert_eq!(Responsibility::Unknown.to_string(), "Unknown");
}
