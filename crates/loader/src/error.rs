use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{0}' contains no columns")]
    EmptyFile(PathBuf),

    #[error("Malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid table: {0}")]
    Core(#[from] core_types::CoreError),
}
