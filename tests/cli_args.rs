//! Integration tests for CLI argument handling
//!
//! Only paths that exit before the terminal is taken over are exercised here.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cityweather"))
        .args(args)
        .env_remove("WEATHERAPI_KEY")
        .env_remove("WEATHERAPI_BASE_URL")
        .env_remove("CITYWEATHER_LOG")
        .output()
        .expect("Failed to execute cityweather")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cityweather"), "Help should mention cityweather");
    assert!(stdout.contains("--api-key"), "Help should mention --api-key");
    assert!(stdout.contains("WEATHERAPI_KEY"), "Help should mention the env var");
}

#[test]
fn test_missing_api_key_prints_error_and_exits() {
    let output = run_cli(&[]);
    assert!(!output.status.success(), "Expected missing key to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Missing API key"),
        "Should explain the missing key: {}",
        stderr
    );
}

#[test]
fn test_invalid_base_url_prints_error_and_exits() {
    let output = run_cli(&["--api-key", "abc", "--base-url", "not-a-url"]);
    assert!(!output.status.success(), "Expected invalid URL to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid base URL"),
        "Should explain the bad URL: {}",
        stderr
    );
}

#[test]
fn test_api_key_from_env_with_help_is_valid() {
    let output = Command::new(env!("CARGO_BIN_EXE_cityweather"))
        .arg("--help")
        .env("WEATHERAPI_KEY", "secret-key")
        .output()
        .expect("Failed to execute cityweather");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("secret-key"), "Key values must stay hidden");
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use cityweather::cli::{Cli, CliError, StartupConfig};

    #[test]
    fn test_cli_explicit_key_is_used() {
        let cli = Cli::parse_from(["cityweather", "--api-key", "abc"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api_key, "abc");
    }

    #[test]
    fn test_cli_bad_url_is_rejected() {
        let cli = Cli::parse_from(["cityweather", "--api-key", "abc", "--base-url", "mailto:x"]);
        let result = StartupConfig::from_cli(&cli);
        assert!(matches!(result, Err(CliError::InvalidBaseUrl(_))));
    }
}
