use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors produced while loading layered configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or merged.
    #[error("failed to assemble configuration sources: {0}")]
    Build(#[source] config::ConfigError),

    /// The merged configuration did not match the target shape.
    #[error("configuration did not match the expected shape: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// Loads `T` from three layers, each overriding the previous one:
/// the serde defaults baked into `T`, an optional file at `path` (extension
/// inferred, `config/server` when `path` is `None`), and finally environment
/// variables with the `FOLIO` prefix, nested keys joined by `__`
/// (`FOLIO__SERVER__PORT` maps to `server.port`).
///
/// A missing file is not an error; the other layers still apply.
///
/// # Errors
/// Fails when a file that does exist cannot be parsed, or when the merged
/// result does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
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
    let effective_path =
        path.map_or_else(|| PathBuf::from("config/server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .convert_case(config::Case::Snake), // Env var overrides (e.g., FOLIO__SERVER__PORT)
        );

    info!("Loading config from {}", effective_path.display());

    builder
        .build()
        .map_err(ConfigError::Build)?
        .try_deserialize::<T>()
        .map_err(ConfigError::Deserialize)
}
