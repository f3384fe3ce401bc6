#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for calculator-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and basic command functionality.

use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Helper to run the calculator-server binary with given arguments
fn run_calculator_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calculator-server")
}

#[test]
fn test_cli_help_command() {
    let output = run_calculator_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("calculator-server"),
        "Should contain binary name"
    );
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_calculator_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calculator-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_calculator_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "Should report an error: {stderr}");
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_calculator_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");

    std::fs::write(&config_path, "invalid: yaml: content: [unclosed")
        .expect("Failed to write file");

    let output = run_calculator_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to parse config file"),
        "Should mention YAML parsing issue: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("valid.yaml");

    let config_content = r#"
server:
  bind_addr: "0.0.0.0"
  port: 8181

logging:
  console_level: warn
  format: json

cors:
  allowed_origins: ["http://localhost:5173"]
"#;

    std::fs::write(&config_path, config_content).expect("Failed to write config file");

    let output = run_calculator_server(&["--config", config_path.to_str().unwrap(), "check"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "Should succeed with valid config: {stderr}"
    );
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("port: 8181"));
    assert!(stdout.contains("http://localhost:5173"));
}

#[test]
fn test_cli_check_rejects_credentials_with_wildcard_origin() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("cors.yaml");

    std::fs::write(
        &config_path,
        "cors:\n  allowed_origins: [\"*\"]\n  allow_credentials: true\n",
    )
    .expect("Failed to write config file");

    let output = run_calculator_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CORS misconfiguration"), "{stderr}");
}

#[test]
fn test_cli_check_rejects_unknown_log_level() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("logging.yaml");

    std::fs::write(&config_path, "logging:\n  console_level: verbose\n")
        .expect("Failed to write config file");

    let output = run_calculator_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("Configuration is valid"));
    assert!(stderr.contains("invalid logging.console_level"), "{stderr}");
}

#[test]
fn test_cli_print_config_applies_port_override() {
    let output = run_calculator_server(&["--port", "9099", "--print-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 9099"), "{stdout}");
    assert!(stdout.contains("server:"));
}
