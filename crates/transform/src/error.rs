use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransformError {
    #[error("Required column '{0}' is missing from the input")]
    MissingColumn(String),

    #[error("Column '{column}' expects a number, found '{value}' at row {row}")]
    InvalidType {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Value of column '{column}' at row {row} is out of range")]
    Overflow { column: String, row: usize },
}
