use std::process::Command;

use mcp_demo::providers::FALLBACK_REASONS;

use crate::common::{fixture, BINARY_PATH, FIXTURE_QUOTES};

fn run_cli(config: &str, command: &str) -> std::process::Output {
    Command::new(BINARY_PATH)
        .args(["--config", &fixture(config), command])
        .env("RUST_LOG", "off")
        .output()
        .expect("mcp-demo should run")
}

#[test]
fn quote_command_prints_entry_from_configured_data_dir() {
    let output = run_cli("tests/fixtures/config_valid.toml", "quote");
    assert!(output.status.success(), "quote should succeed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.trim_end();
    assert!(FIXTURE_QUOTES.contains(&line), "unexpected quote: {line}");
}

#[test]
fn reason_command_falls_back_when_data_is_missing() {
    let output = run_cli("tests/fixtures/config_missing_data.toml", "reason");
    assert!(output.status.success(), "reason should succeed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.trim_end();
    assert!(FALLBACK_REASONS.contains(&line), "unexpected reason: {line}");
}

#[test]
fn invalid_config_exits_with_failure() {
    let output = run_cli("tests/fixtures/config_invalid_port.toml", "reason");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("server.port"), "stderr: {stderr}");
}
