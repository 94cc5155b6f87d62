//! # logctx-config
//!
//! Logger configuration: the level threshold and output format of the
//! process-wide logger, loaded from defaults, an optional file, and env.
//! This crate depends on `ports` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{ENV_LOG_FORMAT, ENV_LOG_LEVEL, LoggerEnv, apply_env_overrides};
pub use load::{
    ConfigError, load_logger_config_from_path, load_logger_config_std_env,
    parse_logger_config_json, parse_logger_config_toml,
};
pub use schema::{DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, LoggerConfig, ResolvedLoggerConfig};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
