//! Application configuration for healops

use crate::error::{HealError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration stored in ~/.healops/config.toml
///
/// Read once at startup. CLI flags and environment variables are layered on
/// top through [`ConfigOverrides`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Namespace inspected by `GET /pods`
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Analyzer binary invoked by `POST /analyze`
    #[serde(default = "default_analyzer_bin")]
    pub analyzer_bin: String,

    /// Only program `POST /run_kubectl` may execute
    #[serde(default = "default_allowed_command")]
    pub allowed_command: String,

    /// Wall-clock bound for `POST /run_kubectl`, in seconds
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,

    /// Wall-clock bound for one analyzer run, in seconds
    #[serde(default = "default_analyzer_timeout")]
    pub analyzer_timeout_secs: u64,

    /// AWS region for Bedrock
    #[serde(default = "default_region")]
    pub bedrock_region: String,

    /// Replace Bedrock access-denied failures with a canned answer
    #[serde(default)]
    pub demo_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            analyzer_bin: default_analyzer_bin(),
            allowed_command: default_allowed_command(),
            command_timeout_secs: default_command_timeout(),
            analyzer_timeout_secs: default_analyzer_timeout(),
            bedrock_region: default_region(),
            demo_mode: false,
        }
    }
}

fn default_namespace() -> String {
    "app".to_string()
}

fn default_analyzer_bin() -> String {
    "k8sgpt".to_string()
}

fn default_allowed_command() -> String {
    "kubectl".to_string()
}

fn default_command_timeout() -> u64 {
    30
}

fn default_analyzer_timeout() -> u64 {
    300
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl AppConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    pub fn analyzer_timeout(&self) -> Duration {
        Duration::from_secs(self.analyzer_timeout_secs)
    }

    /// Apply command-line and environment overrides
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(ns) = &overrides.namespace {
            self.namespace = ns.clone();
        }
        if let Some(bin) = &overrides.analyzer_bin {
            self.analyzer_bin = bin.clone();
        }
        if let Some(cmd) = &overrides.allowed_command {
            self.allowed_command = cmd.clone();
        }
        if let Some(region) = &overrides.bedrock_region {
            self.bedrock_region = region.clone();
        }
        if overrides.demo_mode {
            self.demo_mode = true;
        }
        self
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub namespace: Option<String>,
    pub analyzer_bin: Option<String>,
    pub allowed_command: Option<String>,
    pub bedrock_region: Option<String>,
    pub demo_mode: bool,
}

/// Get the healops config directory (~/.healops)
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".healops"))
        .ok_or_else(|| HealError::Config("Could not determine home directory".to_string()))
}

/// Load application config from ~/.healops/config.toml
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_dir()?.join("config.toml"))
}

/// Load application config from an explicit path, defaulting when absent
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| HealError::Config(e.to_string()))
    } else {
        Ok(AppConfig::default())
    }
}
