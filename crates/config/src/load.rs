//! Config loading helpers (env + file).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s. Only reading and parsing a
//! file can fail; the values themselves are never rejected.

use crate::{LoggerConfig, LoggerEnv, apply_env_overrides};
use logctx_shared::{ErrorCode, ErrorEnvelope};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

/// Failures while loading a logger config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for `LoggerConfig`.
    #[error("invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The file is not valid TOML for `LoggerConfig`.
    #[error("invalid config TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),
    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported config format `{extension}`; use .json or .toml")]
    UnsupportedFormat {
        /// Offending extension.
        extension: String,
    },
}

impl From<ConfigError> for ErrorEnvelope {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        match error {
            ConfigError::Read { path, source } => {
                let code = match source.kind() {
                    std::io::ErrorKind::NotFound => {
                        ErrorCode::new("config", "config_file_not_found")
                    },
                    std::io::ErrorKind::PermissionDenied => {
                        ErrorCode::new("config", "config_file_permission_denied")
                    },
                    _ => ErrorCode::new("config", "config_file_io"),
                };
                Self::new(code, message)
                    .with_metadata("path", path.to_string_lossy().to_string())
            },
            ConfigError::InvalidJson(_) => {
                Self::new(ErrorCode::new("config", "invalid_json"), message)
            },
            ConfigError::InvalidToml(_) => {
                Self::new(ErrorCode::new("config", "invalid_toml"), message)
            },
            ConfigError::UnsupportedFormat { extension } => {
                Self::new(ErrorCode::new("config", "unsupported_format"), message)
                    .with_metadata("extension", extension)
            },
        }
    }
}

/// Parse a logger config from JSON text.
pub fn parse_logger_config_json(input: &str) -> Result<LoggerConfig, ConfigError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a logger config from TOML text.
pub fn parse_logger_config_toml(input: &str) -> Result<LoggerConfig, ConfigError> {
    Ok(toml::from_str(input)?)
}

/// Load the logger config from an optional file path, then apply env.
///
/// Precedence (highest wins):
/// - env overrides (`LoggerEnv`)
/// - config file (JSON or TOML by extension)
/// - defaults (`LoggerConfig::default()`)
pub fn load_logger_config_from_path(
    config_path: Option<&Path>,
    env: &LoggerEnv,
) -> Result<LoggerConfig, ErrorEnvelope> {
    let config = match config_path {
        None => LoggerConfig::default(),
        Some(path) => read_config_file(path).map_err(|error| {
            ErrorEnvelope::from(error).with_metadata("source", "config")
        })?,
    };

    Ok(apply_env_overrides(config, env))
}

/// Load the logger config from std env and an optional file path.
pub fn load_logger_config_std_env(
    config_path: Option<&Path>,
) -> Result<LoggerConfig, ErrorEnvelope> {
    load_logger_config_from_path(config_path, &LoggerEnv::from_std_env())
}

fn read_config_file(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let format = detect_config_format(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match format {
        ConfigFormat::Json => parse_logger_config_json(&text),
        ConfigFormat::Toml => parse_logger_config_toml(&text),
    }
}

const NO_EXTENSION: &str = "(none)";

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat {
            extension: other.unwrap_or(NO_EXTENSION).to_string(),
        }),
    }
}
