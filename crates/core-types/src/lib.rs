pub mod columns;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use columns::REQUIRED_COLUMNS;
pub use error::CoreError;
pub use structs::{DataTable, SalesRow};
