//! Tests for src/diagnostics/analyzer.rs

use crate::common::MockRunner;
use healops::diagnostics::{parse_analyzer_output, AnalysisResult, Analyzer};
use healops::error::HealError;
use serde_json::json;
use std::time::Duration;

const K8SGPT_OUTPUT: &str = r#"{
  "provider": "openai",
  "errors": null,
  "status": "ProblemDetected",
  "problems": 2,
  "results": [
    {
      "kind": "Pod",
      "name": "app/web-1",
      "error": [
        {"Text": "Back-off pulling image \"nginx:lates\"", "KubernetesDoc": "", "Sensitive": []}
      ],
      "details": "The image tag does not exist.",
      "parentObject": "Deployment/web"
    },
    {
      "kind": "Pod",
      "name": "app/db-0",
      "error": null,
      "details": "0/3 nodes are available",
      "parentObject": "StatefulSet/db"
    }
  ]
}"#;

// ============================================================================
// Output normalization
// ============================================================================

#[test]
fn test_invalid_json_is_unparsed() {
    assert_eq!(
        parse_analyzer_output("not json"),
        AnalysisResult::Unparsed("not json".to_string())
    );
}

#[test]
fn test_empty_output_is_unparsed() {
    assert_eq!(
        parse_analyzer_output(""),
        AnalysisResult::Unparsed(String::new())
    );
}

#[test]
fn test_json_string_is_text() {
    assert_eq!(
        parse_analyzer_output(r#""No problems detected""#),
        AnalysisResult::Text("No problems detected".to_string())
    );
}

#[test]
fn test_json_array_is_list() {
    let result = parse_analyzer_output(r#"[{"name": "web-1"}, {"name": "db-2"}]"#);
    match result {
        AnalysisResult::List(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0]["name"], "web-1");
        }
        other => panic!("expected list, got {:?}", other),
    }
}

#[test]
fn test_results_mapping_is_structured() {
    let result = parse_analyzer_output(K8SGPT_OUTPUT);
    let structured = match result {
        AnalysisResult::Structured(s) => s,
        other => panic!("expected structured, got {:?}", other),
    };

    assert_eq!(structured.results.len(), 2);
    assert_eq!(structured.rest["status"], "ProblemDetected");
    assert_eq!(structured.rest["problems"], 2);

    let web = &structured.results[0];
    assert_eq!(web.name.as_deref(), Some("app/web-1"));
    assert_eq!(web.error.len(), 1);
    assert!(web.error[0].text.contains("pulling image"));
    assert_eq!(web.extra["kind"], "Pod");
    assert_eq!(web.extra["parentObject"], "Deployment/web");
    assert!(web.responsibility.is_none());

    // error: null reads as no errors
    assert!(structured.results[1].error.is_empty());
}

#[test]
fn test_structured_keeps_unknown_fields_on_serialize() {
    let structured = match parse_analyzer_output(K8SGPT_OUTPUT) {
        AnalysisResult::Structured(s) => s,
        other => panic!("expected structured, got {:?}", other),
    };
    let value = serde_json::to_value(&structured).unwrap();
    assert_eq!(value["provider"], "openai");
    assert_eq!(value["results"][0]["error"][0]["KubernetesDoc"], "");
    assert_eq!(value["results"][0]["parentObject"], "Deployment/web");
}

#[test]
fn test_mapping_without_results_is_other() {
    assert_eq!(
        parse_analyzer_output(r#"{"status": "OK"}"#),
        AnalysisResult::Other(json!({"status": "OK"}))
    );
}

#[test]
fn test_results_of_wrong_shape_is_other() {
    let result = parse_analyzer_output(r#"{"results": [1, 2, 3]}"#);
    assert_eq!(result, AnalysisResult::Other(json!({"results": [1, 2, 3]})));
}

#[test]
fn test_number_is_other() {
    assert_eq!(parse_analyzer_output("42"), AnalysisResult::Other(json!(42)));
}

#[test]
fn test_kind_names() {
    assert_eq!(parse_analyzer_output("x").kind(), "unparsed");
    assert_eq!(parse_analyzer_output("[]").kind(), "list");
    assert_eq!(parse_analyzer_output(r#"{"results": []}"#).kind(), "structured");
}

// ============================================================================
// Invocation
// ============================================================================

#[tokio::test]
async fn test_invoke_builds_command() {
    let runner = MockRunner::stdout(r#"{"results": []}"#);
    let analyzer = Analyzer::new("k8sgpt", Duration::from_secs(60));

    analyzer.invoke(&runner, "payments").await.unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "k8sgpt");
    assert_eq!(
        calls[0].1,
        vec!["analyze", "--namespace", "payments", "--explain", "--output", "json"]
    );
}

#[tokio::test]
async fn test_invoke_trims_stdout() {
    let runner = MockRunner::stdout("  \"all good\"\n");
    let analyzer = Analyzer::new("k8sgpt", Duration::from_secs(60));

    let result = analyzer.invoke(&runner, "app").await.unwrap();
    assert_eq!(result, AnalysisResult::Text("all good".to_string()));
}

#[tokio::test]
async fn test_invoke_nonzero_exit_carries_stderr() {
    let runner = MockRunner::failing(1, "boom");
    let analyzer = Analyzer::new("k8sgpt", Duration::from_secs(60));

    let err = analyzer.invoke(&runner, "app").await.unwrap_err();
    assert!(matches!(err, HealError::AnalyzerExecution(ref s) if s == "boom"));
    assert_eq!(err.to_string(), "boom");
}

#[tokio::test]
async fn test_invoke_not_json_is_not_an_error() {
    let runner = MockRunner::stdout("not json");
    let analyzer = Analyzer::new("k8sgpt", Duration::from_secs(60));

    let result = analyzer.invoke(&runner, "app").await.unwrap();
    assert_eq!(result, AnalysisResult::Unparsed("not json".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_invoke_times_out() {
    let runner = MockRunner::hanging(Duration::from_secs(600));
    let analyzer = Analyzer::new("k8sgpt", Duration::from_secs(300));

    let err = analyzer.invoke(&runner, "app").await.unwrap_err();
    assert!(matches!(err, HealError::Timeout(_)));
}
