//! # Zenith Loader Crate
//!
//! This crate is the file-system edge of the ETL pipeline: it extracts order tables
//! from CSV files and loads results back into CSV files.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Adapter:** All file and CSV handling lives here. The rest of the
//!   application only sees `DataTable` and `TransformedSales`.
//! - **Bounded Retries:** `read_csv_with_retry` retries a failed read a fixed number of
//!   times with a fixed pause, then collapses the failure into `None`. Every error is
//!   treated the same; details survive only in the log.
//!
//! ## Public API
//!
//! - `read_csv` / `write_csv`: single-shot CSV reading and writing.
//! - `write_transformed`: writes a `TransformedSales` result with its derived columns.
//! - `RetryPolicy` / `read_csv_with_retry`: the bounded-retry extractor.
//! - `LoaderError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod csv_io;
pub mod error;
pub mod retry;

// Re-export the key components to create a clean, public-facing API.
pub use csv_io::{read_csv, write_csv, write_transformed};
pub use error::LoaderError;
pub use retry::{RetryPolicy, read_csv_with_retry};
