use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// The root configuration structure for the entire application.
///
/// Every section is optional in the file; omitted sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loader: LoaderSettings,
    pub output: OutputSettings,
    pub quality: QualitySettings,
    pub logging: LoggingSettings,
}

/// Contains parameters for reading input files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// How many times a read is attempted before giving up.
    pub max_retries: u32,
    /// The fixed pause between two attempts (e.g., "2s", "500ms").
    #[serde(with = "humantime_serde")]
    pub retry_delay: Duration,
}

/// Contains parameters for writing results.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Where the transformed table is written when no path is given on the command line.
    pub transformed_path: PathBuf,
}

/// Contains the thresholds used by the data-quality checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QualitySettings {
    /// The largest quantity a single order line may carry.
    pub max_quantity: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// The default filter directive, used when `RUST_LOG` is not set.
    pub level: String,
    /// If set, logs are also written to daily-rolling files in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            transformed_path: PathBuf::from("transformed_sales.csv"),
        }
    }
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            max_quantity: 10_000,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
