use crate::error::CoreError;
use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// A generic, column-named table of text cells, as read from or written to a CSV file.
///
/// An empty cell stands for a missing value. Every row has exactly as many cells
/// as there are headers; the fields are private so that rows only enter through
/// `push_row`, which enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Creates an empty table with the given column names.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a table from headers and rows, checking every row's width.
    pub fn with_rows<I, S>(headers: I, rows: Vec<Vec<String>>) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(headers);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Appends a row. Fails if the row width differs from the header width.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), CoreError> {
        if row.len() != self.headers.len() {
            return Err(CoreError::RowWidthMismatch {
                row: self.rows.len(),
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Returns every cell of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// `(rows, columns)`, mirroring a dataframe's shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single sales order after transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRow {
    pub order_id: String,
    pub customer_id: String,
    pub product_id: String,
    pub quantity: Decimal,
    pub price_per_item: Option<Decimal>, // None when the input cell was empty
    pub order_date: Option<NaiveDateTime>, // None when the input could not be parsed
    pub total_price: Option<Decimal>,
    /// Values of the non-required input columns, in input order.
    pub extras: Vec<String>,
}

impl SalesRow {
    /// Renders the order date the way it is written back to CSV.
    ///
    /// Midnight timestamps are written as plain dates; missing dates as an empty cell.
    pub fn order_date_text(&self) -> String {
        match self.order_date {
            Some(ts) if ts.time() == NaiveTime::MIN => ts.format("%Y-%m-%d").to_string(),
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => String::new(),
        }
    }
}
