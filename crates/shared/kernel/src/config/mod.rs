use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`SHUB__SECTION__KEY`).
pub const ENV_PREFIX: &str = "SHUB";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_CONFIG_FILE: &str = "server";

/// Custom error type for config loading.
#[shub_derive::shub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration object from a file overlaid with environment variables.
///
/// 1. **Base File**: the given path, or `server.{toml,yaml,json,...}` in the working directory.
///    An explicit path must exist; the implicit `server` file is optional so that every
///    field falls back to its `Default`.
/// 2. **Environment Overrides**: variables prefixed with `SHUB__`, nested with double
///    underscores (e.g. `SHUB__MODEL__CLASSIFIER` maps to `model.classifier`).
///    `SHUB__POSTS__INSTANCES` accepts a comma-separated list.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be parsed,
/// or the merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use shub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("posts.instances")
}

fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
