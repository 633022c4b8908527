use core_types::columns::{REQUIRED_COLUMNS, TOTAL_PRICE, TOTAL_SALES};
use core_types::{CoreError, DataTable, SalesRow};
use rust_decimal::Decimal;

/// The output of a sales transformation.
///
/// `total_sales` is a dataset-wide aggregate. It is stored once here and only
/// broadcast into a per-row column by `total_sales_column` and `to_table`, so
/// it is identical for every row.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedSales {
    /// Names of the non-required input columns carried through, in input order.
    pub extra_columns: Vec<String>,
    pub rows: Vec<SalesRow>,
    pub total_sales: Decimal,
}

impl TransformedSales {
    /// The output column names: required columns, extras, then the derived columns.
    pub fn columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(self.extra_columns.iter().cloned())
            .chain([TOTAL_PRICE.to_string(), TOTAL_SALES.to_string()])
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns().iter().any(|c| c == name)
    }

    /// `(rows, columns)` of the transformed table.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), REQUIRED_COLUMNS.len() + self.extra_columns.len() + 2)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_price_column(&self) -> Vec<Option<Decimal>> {
        self.rows.iter().map(|r| r.total_price).collect()
    }

    /// The grand total repeated once per row.
    pub fn total_sales_column(&self) -> Vec<Decimal> {
        vec![self.total_sales; self.rows.len()]
    }

    /// Flattens the result back into a text table, ready to be written as CSV.
    pub fn to_table(&self) -> Result<DataTable, CoreError> {
        let total_sales = self.total_sales.to_string();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    row.order_id.clone(),
                    row.customer_id.clone(),
                    row.product_id.clone(),
                    row.quantity.to_string(),
                    decimal_cell(row.price_per_item),
                    row.order_date_text(),
                ];
                cells.extend(row.extras.iter().cloned());
                cells.push(decimal_cell(row.total_price));
                cells.push(total_sales.clone());
                cells
            })
            .collect();

        DataTable::with_rows(self.columns(), rows)
    }
}

fn decimal_cell(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
