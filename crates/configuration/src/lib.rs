use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, LoaderSettings, LoggingSettings, OutputSettings, QualitySettings};

/// Environment variables with this prefix override file values,
/// e.g. `ZENITH_ETL__LOADER__MAX_RETRIES=5`.
pub const ENV_PREFIX: &str = "ZENITH_ETL";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the given file (or an optional
/// `config.toml` in the working directory when no path is given), then the environment.
/// The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        // An explicitly requested file must exist.
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

/// Checks the invariants the rest of the application relies on.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.loader.max_retries == 0 {
        return Err(ConfigError::ValidationError(
            "loader.max_retries must be at least 1".to_string(),
        ));
    }
    if config.quality.max_quantity == 0 {
        return Err(ConfigError::ValidationError(
            "quality.max_quantity must be greater than 0".to_string(),
        ));
    }
    if config.output.transformed_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "output.transformed_path must not be empty".to_string(),
        ));
    }
    Ok(())
}
