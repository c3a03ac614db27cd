//! Configuration for the StripeKit client.
//!
//! Settings are layered: built-in defaults, then `config/default.*`, then
//! `config/{RUN_ENV}.*`, then `STRIPEKIT__*` environment variables. The
//! secret key falls back to `STRIPE_SECRET_KEY` when no source sets it.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use models::*;

/// Prefix for configuration environment variables (`STRIPEKIT__API_BASE`).
pub const ENV_PREFIX: &str = "STRIPEKIT";

/// Environment variable holding the secret API key.
pub const SECRET_KEY_ENV: &str = "STRIPE_SECRET_KEY";

/// Loads the configuration from the default locations.
///
/// The config directory is `./config` unless `STRIPEKIT_CONFIG_DIR` is set;
/// the environment-specific file is picked by `RUN_ENV` (default `debug`).
pub fn load_config() -> Result<StripeConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("STRIPEKIT_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env)
}

/// Loads the configuration from an explicit directory and run environment.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<StripeConfig, ConfigError> {
    let mut config = build_config(config_dir, run_env, None)?;
    apply_secret_key_fallback(&mut config, env::var(SECRET_KEY_ENV).ok());
    Ok(config)
}

// An empty key from a templated env file counts as unset.
fn apply_secret_key_fallback(config: &mut StripeConfig, fallback: Option<String>) {
    if config.secret_key.as_deref().map_or(true, str::is_empty) {
        config.secret_key = fallback.filter(|key| !key.is_empty());
    }
}

fn build_config(
    config_dir: &Path,
    run_env: &str,
    env_source: Option<config::Map<String, String>>,
) -> Result<StripeConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .set_default("api_base", DEFAULT_API_BASE)?
        .set_default("api_version", DEFAULT_API_VERSION)?
        .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .set_default("connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS as i64)?
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env_source),
        );

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `.env` unless `DOTENV_OVERRIDE` names another one. Loading
/// happens at most once per process; a missing file is not an error.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
