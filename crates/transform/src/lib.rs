//! # Zenith Sales Transformation
//!
//! This crate turns raw order tables into transformed sales data and judges the
//! quality of the result.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files or
//!   the command line. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `SalesTransformer` takes a `DataTable` as input and
//!   produces a new `TransformedSales`; the input is never mutated.
//!
//! ## Public API
//!
//! - `SalesTransformer`: derives `total_price`, parses dates, filters and totals rows.
//! - `TransformedSales`: the transformed rows plus the dataset-wide `total_sales`.
//! - `QualityValidator` / `QualityReport`: data-quality checks over transformed sales.
//! - `TransformError`: the structural errors a transformation can fail with.

// Declare the modules that constitute this crate.
pub mod dates;
pub mod engine;
pub mod error;
pub mod quality;
pub mod sales;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SalesTransformer;
pub use error::TransformError;
pub use quality::{CheckResult, QualityReport, QualityValidator};
pub use sales::TransformedSales;
