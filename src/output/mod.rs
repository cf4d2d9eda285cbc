//! Output formatting for healops

use crate::cli::OutputFormat;
use crate::diagnostics::{PodHealth, Responsibility, ResponsibilitySummary};
use crate::error::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Render any serializable value as JSON or YAML
pub fn format_structured<T: Serialize>(value: &T, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Pod health as a table, ready pods first
pub fn format_pod_health(health: &PodHealth) -> String {
    if health.total() == 0 {
        return "No pods found".to_string();
    }

    let rows: Vec<Vec<String>> = health
        .healthy
        .iter()
        .map(|p| (p, true))
        .chain(health.unhealthy.iter().map(|p| (p, false)))
        .map(|(pod, ready)| {
            let status = if ready {
                "Ready".green().to_string()
            } else {
                "NotReady".red().to_string()
            };
            vec![pod.name.clone(), pod.namespace.clone(), status]
        })
        .collect();

    format_table_raw(&["NAME", "NAMESPACE", "READY"], &rows)
}

/// Responsibility counts as a table
pub fn format_summary(summary: &ResponsibilitySummary) -> String {
    if summary.is_empty() {
        return "No findings".to_string();
    }

    let rows: Vec<Vec<String>> = summary
        .iter()
        .map(|(label, count)| vec![colorize_responsibility(*label), count.to_string()])
        .collect();

    format_table_raw(&["RESPONSIBILITY", "FINDINGS"], &rows)
}

pub fn colorize_responsibility(label: Responsibility) -> String {
    match label {
        Responsibility::Developer => label.magenta().to_string(),
        Responsibility::DevOps => label.green().to_string(),
        Responsibility::Unknown => label.dimmed().to_string(),
    }
}

/// Format raw headers and rows as a table
pub fn format_table_raw(headers: &[&str], rows: &[Vec<String>]) -> String {
    // Calculate column widths
    let num_cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            widths[i] = widths[i].max(strip_ansi_codes(cell).len());
        }
    }

    let mut output = String::new();

    let mut header_line = String::new();
    for (i, header) in headers.iter().enumerate() {
        let padding = widths[i].saturating_sub(header.len());
        header_line.push_str(header);
        header_line.push_str(&" ".repeat(padding + 2));
    }
    output.push_str(&header_line.trim_end().bold().to_string());
    output.push('\n');

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            let padding = widths[i].saturating_sub(strip_ansi_codes(cell).len());
            line.push_str(cell);
            line.push_str(&" ".repeat(padding + 2));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Strip ANSI escape codes for length calculation
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }

    result
}
