//! k8sgpt invocation and output normalization

use super::exec::{run_with_timeout, CommandRunner};
use super::types::{AnalysisResult, StructuredOutput};
use crate::config::AppConfig;
use crate::error::{HealError, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Runs the external analyzer against a namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analyzer {
    program: String,
    timeout: Duration,
}

impl Analyzer {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.analyzer_bin.clone(), config.analyzer_timeout())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for `<analyzer> analyze --namespace <ns> --explain --output json`
    pub fn command_args(namespace: &str) -> Vec<String> {
        [
            "analyze",
            "--namespace",
            namespace,
            "--explain",
            "--output",
            "json",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Run the analyzer and normalize what it printed.
    ///
    /// A non-zero exit is an error carrying stderr. Unparseable stdout is not:
    /// it comes back as [`AnalysisResult::Unparsed`].
    pub async fn invoke(
        &self,
        runner: &dyn CommandRunner,
        namespace: &str,
    ) -> Result<AnalysisResult> {
        let args = Self::command_args(namespace);
        info!("Running command: {} {}", self.program, args.join(" "));

        let output = run_with_timeout(runner, &self.program, &args, self.timeout).await?;
        if !output.success() {
            debug!(exit_code = ?output.exit_code, "Analyzer failed");
            return Err(HealError::AnalyzerExecution(output.stderr));
        }

        let raw = output.stdout.trim();
        debug!("Raw k8sgpt output: {}", raw);

        let result = parse_analyzer_output(raw);
        info!(kind = result.kind(), "Parsed analyzer output");
        Ok(result)
    }
}

/// Classify analyzer stdout into one [`AnalysisResult`] variant
pub fn parse_analyzer_output(raw: &str) -> AnalysisResult {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return AnalysisResult::Unparsed(raw.to_string()),
    };

    match value {
        Value::String(text) => AnalysisResult::Text(text),
        Value::Array(items) => AnalysisResult::List(items),
        Value::Object(map) if map.get("results").is_some_and(Value::is_array) => {
            let value = Value::Object(map);
            match serde_json::from_value::<StructuredOutput>(value.clone()) {
                Ok(structured) => AnalysisResult::Structured(structured),
                Err(e) => {
                    debug!("Results are not findings, passing through: {}", e);
                    AnalysisResult::Other(value)
                }
            }
        }
        other => AnalysisResult::Other(other),
    }
}
