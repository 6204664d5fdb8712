use config::{Case, Config, Environment, File};
use mhs_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "server";

#[mhs_derive::mhs_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// The file [`load_config`] reads for `path`, before extension resolution.
#[must_use]
pub fn config_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf())
}

/// Loads configuration from an optional file overlaid with environment overrides.
///
/// 1. **File**: `path` (default `server`, extension resolved by the `config` crate:
///    `server.toml`, `server.json`, ...). A missing file is not an error; every field has a default.
/// 2. **Environment**: variables prefixed with `MHS__`, nested with `__`
///    (`MHS__SERVER__PORT=9000` sets `server.port`).
///
/// # Errors
/// Returns an error if the file exists but is malformed, or if a value does not
/// match the shape of `T`.
///
/// # Example
/// ```rust
/// use mhs_kernel::config::load_config;
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
    let effective_path = config_path(path);

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
