//! Subprocess execution with a wall-clock bound

use crate::error::{HealError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a program with an argument vector. No shell is involved.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Runner that spawns real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        debug!("Running command: {} {}", program, args.join(" "));

        // kill_on_drop lets a timeout reap the child
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| HealError::CommandLaunch {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run a command, giving up after `limit`
pub async fn run_with_timeout(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[String],
    limit: Duration,
) -> Result<CommandOutput> {
    match tokio::time::timeout(limit, runner.run(program, args)).await {
        Ok(result) => result,
        Err(_) => Err(HealError::Timeout(format!(
            "'{}' (exceeded {}s)",
            program,
            limit.as_secs()
        ))),
    }
}

/// Allowlist for the raw command endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPolicy {
    program: String,
}

impl CommandPolicy {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Turn `"<program> arg arg"` into its argument vector.
    ///
    /// Arguments are split on whitespace and never reach a shell, so
    /// `;`, `|`, `$(...)` and friends are passed through as literal arguments.
    pub fn parse(&self, command: &str) -> Result<Vec<String>> {
        let rest = command
            .strip_prefix(self.program.as_str())
            .and_then(|r| r.strip_prefix(' '))
            .ok_or_else(|| {
                HealError::CommandNotAllowed(format!(
                    "Only '{}' commands are allowed",
                    self.program
                ))
            })?;

        Ok(rest.split_whitespace().map(String::from).collect())
    }
}
