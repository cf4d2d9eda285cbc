//! One-shot diagnostics commands

use crate::cli::OutputFormat;
use crate::client::create_client;
use crate::config::AppConfig;
use crate::diagnostics::{
    analyze_pod, classify, list_pod_health, AnalyzeRequest, AnalyzeResponse, Analyzer,
    KubePodSource, ProcessRunner,
};
use crate::error::Result;
use crate::output::{colorize_responsibility, format_pod_health, format_structured, format_summary};
use serde_json::json;

/// Print the readiness partition of the configured namespace
pub async fn show_pods(context: Option<&str>, config: &AppConfig, output: OutputFormat) -> Result<()> {
    let client = create_client(context).await?;
    let source = KubePodSource::new(client);
    let health = list_pod_health(&source, &config.namespace).await?;

    let output_str = match output {
        OutputFormat::Table => format_pod_health(&health),
        _ => format_structured(&health, output)?,
    };

    println!("{}", output_str);
    Ok(())
}

/// Analyze one pod and print the classified report
pub async fn analyze(config: &AppConfig, pod: &str, output: OutputFormat) -> Result<()> {
    let request = AnalyzeRequest {
        pod_name: pod.to_string(),
        namespace: config.namespace.clone(),
    };
    let response = analyze_pod(&Analyzer::from_config(config), &ProcessRunner, &request).await?;

    let output_str = match (output, &response) {
        (
            OutputFormat::Table,
            AnalyzeResponse::Report {
                responsibility_summary: Some(summary),
                ..
            },
        ) => format_summary(summary),
        _ => format_structured(&response, output)?,
    };

    println!("{}", output_str);
    Ok(())
}

/// Print the responsibility label for free text
pub fn classify_text(text: &str, output: OutputFormat) -> Result<()> {
    let label = classify(text);
    let output_str = match output {
        OutputFormat::Table => colorize_responsibility(label),
        _ => format_structured(&json!({ "responsibility": label }), output)?,
    };

    println!("{}", output_str);
    Ok(())
}
