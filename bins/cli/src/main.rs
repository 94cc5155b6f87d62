//! CLI binary entrypoint.

mod error;

use clap::Parser;
use error::{CliError, ExitCode};
use logctx::{
    ExecutionContext, LogCtxBuilder, LogLevel, LoggerConfig, configure_with, entry_from,
    load_logger_config_std_env,
};
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "logctx",
    version,
    about = "Emit one structured log record with inherited context",
    long_about = None
)]
struct Cli {
    /// Optional logger config file (JSON/TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Logger threshold override; beats `LOGCTX_LOG_LEVEL` and the config file.
    #[arg(long)]
    log_level: Option<String>,
    /// Logger format override (`json` or `text`).
    #[arg(long)]
    log_format: Option<String>,
    /// Level the message is emitted at.
    #[arg(long, default_value = "info")]
    level: String,
    #[arg(long)]
    correlation_id: Option<String>,
    #[arg(long)]
    provider: Option<String>,
    #[arg(long)]
    service: Option<String>,
    #[arg(long)]
    region: Option<String>,
    /// Full scrape id; JSON values are kept structured.
    #[arg(long)]
    scrape_id_full: Option<String>,
    /// Short scrape id; JSON values are kept structured.
    #[arg(long)]
    scrape_id_short: Option<String>,
    /// Field on the enclosing (parent) context. Repeatable.
    #[arg(long = "field", value_name = "KEY=VALUE")]
    fields: Vec<String>,
    /// Message to emit.
    message: String,
}

fn main() -> std::process::ExitCode {
    init_diagnostics();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::ExitCode::from(ExitCode::Ok.as_u8()),
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn init_diagnostics() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = effective_config(cli)?;
    let level = LogLevel::parse(&cli.level)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown level `{}`", cli.level)))?;

    let mut parent_scope = LogCtxBuilder::new();
    for raw in &cli.fields {
        let (key, value) = parse_field(raw)?;
        parent_scope.with_field(key, value);
    }

    configure_with(&config);

    let parent = ExecutionContext::root().attach(parent_scope.build());
    let ctx = parent.attach(record_scope(cli).build());
    tracing::debug!(depth = ctx.depth(), "emitting record");

    let entry = entry_from(&ctx);
    if level == LogLevel::Fatal {
        entry.fatal(&cli.message);
    }
    entry.log(level, &cli.message);
    entry.logger().flush();
    Ok(())
}

fn effective_config(cli: &Cli) -> Result<LoggerConfig, CliError> {
    let mut config = load_logger_config_std_env(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.level.clone_from(level);
    }
    if let Some(format) = &cli.log_format {
        config.format.clone_from(format);
    }
    Ok(config)
}

fn record_scope(cli: &Cli) -> LogCtxBuilder {
    let mut scope = LogCtxBuilder::new();
    if let Some(provider) = &cli.provider {
        scope.with_provider(provider.as_str());
    }
    if let Some(service) = &cli.service {
        scope.with_service(service.as_str());
    }
    if let Some(region) = &cli.region {
        scope.with_region(region.as_str());
    }
    if let Some(correlation_id) = &cli.correlation_id {
        scope.with_correlation_id(correlation_id.as_str());
    }
    if let Some(full) = &cli.scrape_id_full {
        scope.with_scrape_id_full(flag_value(full));
    }
    if let Some(short) = &cli.scrape_id_short {
        scope.with_scrape_id_short(flag_value(short));
    }
    scope
}

fn parse_field(raw: &str) -> Result<(String, String), CliError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(CliError::InvalidInput(format!(
            "--field expects KEY=VALUE, got `{raw}`"
        )));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "--field has an empty key: `{raw}`"
        )));
    }
    Ok((key.to_string(), value.to_string()))
}

fn flag_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_flag_splits_on_first_equals() {
        assert!(matches!(
            parse_field("query=a=b"),
            Ok((key, value)) if key == "query" && value == "a=b"
        ));
        assert!(matches!(
            parse_field("empty="),
            Ok((key, value)) if key == "empty" && value.is_empty()
        ));
    }

    #[test]
    fn field_flag_rejects_missing_separator_and_key() {
        assert!(matches!(parse_field("novalue"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_field("=value"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn scrape_ids_keep_json_structure() {
        assert_eq!(flag_value("7"), Value::from(7));
        assert_eq!(flag_value("abc"), Value::from("abc"));
        assert_eq!(
            flag_value(r#"{"seq":1}"#),
            serde_json::json!({"seq": 1})
        );
    }

    #[test]
    fn cli_flags_parse() {
        let cli = Cli::try_parse_from([
            "logctx",
            "--level",
            "warn",
            "--field",
            "a=1",
            "--field",
            "b=2",
            "--region",
            "eu",
            "hello",
        ]);
        assert!(matches!(
            cli,
            Ok(cli) if cli.fields.len() == 2 && cli.message == "hello" && cli.level == "warn"
        ));
    }
}
