//! CLI E2E tests: logger configuration precedence.

use serde_json::{Value, json};
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

fn logctx() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_logctx"));
    command
        .env_remove("RUST_LOG")
        .env_remove("LOGCTX_LOG_LEVEL")
        .env_remove("LOGCTX_LOG_FORMAT");
    command
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../crates/config/tests/fixtures")
        .join(name)
}

fn json_records(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn env_selects_json_format() -> io::Result<()> {
    let output = logctx()
        .env("LOGCTX_LOG_FORMAT", "json")
        .args(["--service", "pke", "from env"])
        .output()?;
    assert!(output.status.success());

    let records = json_records(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(
        records.first().and_then(|record| record.get("service")),
        Some(&json!("pke"))
    );
    Ok(())
}

#[test]
fn flag_beats_env() -> io::Result<()> {
    let output = logctx()
        .env("LOGCTX_LOG_FORMAT", "json")
        .args(["--log-format", "text", "flagged"])
        .output()?;
    assert!(output.status.success());
    assert!(json_records(&output).is_empty());
    assert!(stderr(&output).contains("level=info msg=flagged"));
    Ok(())
}

#[test]
fn config_file_sets_level_and_format() -> io::Result<()> {
    let output = logctx()
        .arg("--config")
        .arg(fixture("logger.valid.toml"))
        .args(["--level", "debug", "from file"])
        .output()?;
    assert!(output.status.success());

    let records = json_records(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(
        records.first().and_then(|record| record.get("level")),
        Some(&json!("debug"))
    );
    Ok(())
}

#[test]
fn env_beats_config_file() -> io::Result<()> {
    let output = logctx()
        .env("LOGCTX_LOG_LEVEL", "error")
        .arg("--config")
        .arg(fixture("logger.valid.toml"))
        .args(["--level", "warn", "suppressed"])
        .output()?;
    assert!(output.status.success());
    assert!(json_records(&output).is_empty());
    Ok(())
}

#[test]
fn degraded_config_falls_back_to_info_text() -> io::Result<()> {
    let debug = logctx()
        .arg("--config")
        .arg(fixture("logger.degraded.toml"))
        .args(["--level", "debug", "hidden"])
        .output()?;
    assert!(debug.status.success());
    assert!(!stderr(&debug).contains("msg=hidden"));

    let info = logctx()
        .arg("--config")
        .arg(fixture("logger.degraded.toml"))
        .arg("shown")
        .output()?;
    assert!(info.status.success());
    assert!(stderr(&info).contains("level=info msg=shown"));
    Ok(())
}

#[test]
fn invalid_config_file_is_invalid_input() -> io::Result<()> {
    let output = logctx()
        .arg("--config")
        .arg(fixture("logger.invalid.toml"))
        .arg("never")
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("config error"));
    Ok(())
}

#[test]
fn missing_or_unsupported_config_is_invalid_input() -> io::Result<()> {
    let missing = logctx()
        .arg("--config")
        .arg(fixture("absent.toml"))
        .arg("never")
        .output()?;
    assert_eq!(missing.status.code(), Some(2));

    let unsupported = logctx()
        .arg("--config")
        .arg(fixture("logger.yaml"))
        .arg("never")
        .output()?;
    assert_eq!(unsupported.status.code(), Some(2));
    Ok(())
}
