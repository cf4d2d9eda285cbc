//! Cluster diagnostics
//!
//! Pod readiness collection, k8sgpt invocation, responsibility
//! classification and aggregation.

pub mod aggregate;
pub mod analyzer;
pub mod classify;
pub mod exec;
pub mod pods;
pub mod report;
pub mod types;

pub use aggregate::{aggregate, filter_by_pod, Aggregation};
pub use analyzer::{parse_analyzer_output, Analyzer};
pub use classify::{classify, classify_finding};
pub use exec::{CommandOutput, CommandPolicy, CommandRunner, ProcessRunner};
pub use pods::{list_pod_health, KubePodSource, PodSource};
pub use report::{AnalyzeRequest, AnalyzeResponse};
pub use types::*;

use crate::error::Result;

/// Run the analyzer for a request and shape the response
pub async fn analyze_pod(
    analyzer: &Analyzer,
    runner: &dyn CommandRunner,
    request: &AnalyzeRequest,
) -> Result<AnalyzeResponse> {
    request.validate()?;
    let result = analyzer.invoke(runner, &request.namespace).await?;
    Ok(AnalyzeResponse::for_pod(&request.pod_name, result))
}
