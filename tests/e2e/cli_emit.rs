//! CLI E2E tests: record emission and context inheritance.

use serde_json::{Value, json};
use std::io;
use std::process::{Command, Output};

fn logctx() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_logctx"));
    command
        .env_remove("RUST_LOG")
        .env_remove("LOGCTX_LOG_LEVEL")
        .env_remove("LOGCTX_LOG_FORMAT");
    command
}

fn run(args: &[&str]) -> io::Result<Output> {
    logctx().args(args).output()
}

fn json_records(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

fn single_record(output: &Output) -> io::Result<Value> {
    let mut records = json_records(output);
    if records.len() != 1 {
        return Err(io::Error::other(format!(
            "expected one record, got {}: {}",
            records.len(),
            String::from_utf8_lossy(&output.stderr)
        )));
    }
    records
        .pop()
        .ok_or_else(|| io::Error::other("no record emitted"))
}

#[test]
fn builder_flags_become_record_fields() -> io::Result<()> {
    let output = run(&[
        "--log-format",
        "json",
        "--provider",
        "aws",
        "--service",
        "pke",
        "--region",
        "eu-west-1",
        "scraped 42 products",
    ])?;
    assert!(output.status.success());

    let record = single_record(&output)?;
    assert_eq!(record.get("provider"), Some(&json!("aws")));
    assert_eq!(record.get("service"), Some(&json!("pke")));
    assert_eq!(record.get("region"), Some(&json!("eu-west-1")));
    assert_eq!(record.get("level"), Some(&json!("info")));
    assert_eq!(record.get("msg"), Some(&json!("scraped 42 products")));
    assert!(record.get("correlation-id").is_none());
    assert!(record.get("time").and_then(Value::as_str).is_some());
    Ok(())
}

#[test]
fn child_fields_override_parent_fields() -> io::Result<()> {
    let output = run(&[
        "--log-format",
        "json",
        "--field",
        "correlation-id=xyz",
        "--field",
        "region=eu",
        "--correlation-id",
        "abc",
        "retrying",
    ])?;
    assert!(output.status.success());

    let record = single_record(&output)?;
    assert_eq!(record.get("correlation-id"), Some(&json!("abc")));
    assert_eq!(record.get("region"), Some(&json!("eu")));
    Ok(())
}

#[test]
fn scrape_ids_keep_json_values() -> io::Result<()> {
    let output = run(&[
        "--log-format",
        "json",
        "--scrape-id-short",
        "7",
        "--scrape-id-full",
        r#"{"seq":7,"started":"2018-06-01T12:00:00Z"}"#,
        "scrape started",
    ])?;

    let record = single_record(&output)?;
    assert_eq!(record.get("scrape-id-short"), Some(&json!(7)));
    assert_eq!(record.pointer("/scrape-id-full/seq"), Some(&json!(7)));
    Ok(())
}

#[test]
fn unknown_threshold_falls_back_to_info() -> io::Result<()> {
    let suppressed = run(&[
        "--log-level",
        "bogus-level",
        "--log-format",
        "json",
        "--level",
        "debug",
        "hidden",
    ])?;
    assert!(suppressed.status.success());
    assert!(json_records(&suppressed).is_empty());

    let emitted = run(&[
        "--log-level",
        "bogus-level",
        "--log-format",
        "json",
        "--level",
        "warn",
        "shown",
    ])?;
    let record = single_record(&emitted)?;
    assert_eq!(record.get("level"), Some(&json!("warning")));
    Ok(())
}

#[test]
fn debug_threshold_admits_debug_records() -> io::Result<()> {
    let output = run(&[
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--level",
        "debug",
        "probe",
    ])?;
    let record = single_record(&output)?;
    assert_eq!(record.get("level"), Some(&json!("debug")));
    Ok(())
}

#[test]
fn text_is_the_default_format() -> io::Result<()> {
    let output = run(&["--region", "eu-west-1", "hello"])?;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr.lines().next().unwrap_or_default();
    assert!(line.starts_with("time=\""), "unexpected line: {line}");
    assert!(line.contains(" level=info msg=hello region=eu-west-1"));
    Ok(())
}

#[test]
fn fatal_record_exits_with_status_one() -> io::Result<()> {
    let output = run(&["--log-format", "json", "--level", "fatal", "giving up"])?;
    assert_eq!(output.status.code(), Some(1));

    let record = single_record(&output)?;
    assert_eq!(record.get("level"), Some(&json!("fatal")));
    assert_eq!(record.get("msg"), Some(&json!("giving up")));
    Ok(())
}

#[test]
fn malformed_field_is_invalid_input() -> io::Result<()> {
    let output = run(&["--log-format", "json", "--field", "novalue", "message"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(json_records(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid input"));
    Ok(())
}

#[test]
fn unknown_emission_level_is_invalid_input() -> io::Result<()> {
    let output = run(&["--level", "loud", "message"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
