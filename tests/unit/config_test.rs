//! Tests for src/config/mod.rs

use healops::config::{load_config_from, AppConfig, ConfigOverrides};
use healops::error::HealError;
use std::path::PathBuf;
use std::time::Duration;

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "healops-{}-{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.namespace, "app");
    assert_eq!(config.analyzer_bin, "k8sgpt");
    assert_eq!(config.allowed_command, "kubectl");
    assert_eq!(config.command_timeout(), Duration::from_secs(30));
    assert_eq!(config.analyzer_timeout(), Duration::from_secs(300));
    assert_eq!(config.bedrock_region, "us-east-1");
    assert!(!config.demo_mode);
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("healops-does-not-exist.toml");
    assert_eq!(load_config_from(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = temp_config("partial", "namespace = \"shop\"\ncommand_timeout_secs = 10\n");
    let config = load_config_from(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.namespace, "shop");
    assert_eq!(config.command_timeout_secs, 10);
    assert_eq!(config.analyzer_bin, "k8sgpt");
    assert_eq!(config.allowed_command, "kubectl");
}

#[test]
fn test_invalid_file_is_config_error() {
    let path = temp_config("invalid", "namespace = [not toml");
    let err = load_config_from(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, HealError::Config(_)));
}

#[test]
fn test_overrides_win() {
    let overrides = ConfigOverrides {
        namespace: Some("payments".to_string()),
        analyzer_bin: Some("/usr/local/bin/k8sgpt".to_string()),
        allowed_command: None,
        bedrock_region: Some("eu-west-1".to_string()),
        demo_mode: true,
    };
    let config = AppConfig::default().with_overrides(&overrides);

    assert_eq!(config.namespace, "payments");
    assert_eq!(config.analyzer_bin, "/usr/local/bin/k8sgpt");
    assert_eq!(config.allowed_command, "kubectl");
    assert_eq!(config.bedrock_region, "eu-west-1");
    assert!(config.demo_mode);
}

#[test]
fn test_empty_overrides_change_nothing() {
    let config = AppConfig {
        demo_mode: true,
        ..Default::default()
    };
    let overridden = config.clone().with_overrides(&ConfigOverrides::default());
    assert_eq!(overridden, config);
}
