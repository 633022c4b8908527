use crate::dates::parse_order_date;
use crate::error::TransformError;
use crate::sales::TransformedSales;
use core_types::columns::{
    CUSTOMER_ID, ORDER_DATE, ORDER_ID, PRICE_PER_ITEM, PRODUCT_ID, QUANTITY, TOTAL_PRICE,
    TOTAL_SALES,
};
use core_types::{DataTable, SalesRow};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Positions of the required columns inside an input table.
struct ColumnLayout {
    order_id: usize,
    customer_id: usize,
    product_id: usize,
    quantity: usize,
    price_per_item: usize,
    order_date: usize,
    extras: Vec<usize>,
}

/// A stateless calculator that turns raw order tables into transformed sales data.
#[derive(Debug, Default)]
pub struct SalesTransformer {}

impl SalesTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for transforming sales data.
    ///
    /// 1. Calculates `total_price` as `quantity * price_per_item`.
    /// 2. Converts `order_date` from text to a timestamp; unparseable dates become `None`.
    /// 3. Filters out rows where `quantity <= 0` (or the quantity is missing).
    /// 4. Computes `total_sales`, the sum of `total_price` over the retained rows.
    ///
    /// # Errors
    ///
    /// * `TransformError::MissingColumn` if a required column is absent.
    /// * `TransformError::InvalidType` if a `quantity` or `price_per_item` cell is not
    ///   numeric. Every row is checked, including rows the filter would drop.
    /// * `TransformError::Overflow` if a number, a `total_price` or the running
    ///   `total_sales` does not fit in a `Decimal`.
    pub fn transform(&self, table: &DataTable) -> Result<TransformedSales, TransformError> {
        let layout = self.resolve_columns(table)?;

        let mut rows = Vec::with_capacity(table.len());
        let mut total_sales = Decimal::ZERO;
        for (row_no, cells) in table.rows().iter().enumerate() {
            let quantity = parse_number(&cells[layout.quantity], QUANTITY, row_no)?;
            let price_per_item =
                parse_number(&cells[layout.price_per_item], PRICE_PER_ITEM, row_no)?;

            let Some(quantity) = quantity.filter(|q| *q > Decimal::ZERO) else {
                tracing::trace!(row = row_no, "Dropping row with non-positive quantity.");
                continue;
            };

            let total_price = match price_per_item {
                Some(price) => Some(
                    quantity
                        .checked_mul(price)
                        .ok_or_else(|| overflow(TOTAL_PRICE, row_no))?,
                ),
                None => None,
            };
            if let Some(price) = total_price {
                total_sales = total_sales
                    .checked_add(price)
                    .ok_or_else(|| overflow(TOTAL_SALES, row_no))?;
            }

            rows.push(SalesRow {
                order_id: cells[layout.order_id].clone(),
                customer_id: cells[layout.customer_id].clone(),
                product_id: cells[layout.product_id].clone(),
                quantity,
                price_per_item,
                order_date: parse_order_date(&cells[layout.order_date]),
                total_price,
                extras: layout.extras.iter().map(|&i| cells[i].clone()).collect(),
            });
        }

        tracing::info!(
            input_rows = table.len(),
            retained_rows = rows.len(),
            %total_sales,
            "Sales data transformed."
        );

        Ok(TransformedSales {
            extra_columns: layout
                .extras
                .iter()
                .map(|&i| table.headers()[i].clone())
                .collect(),
            rows,
            total_sales,
        })
    }

    /// Locates every required column, failing on the first one that is absent.
    fn resolve_columns(&self, table: &DataTable) -> Result<ColumnLayout, TransformError> {
        let find = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
        };

        let order_id = find(ORDER_ID)?;
        let customer_id = find(CUSTOMER_ID)?;
        let product_id = find(PRODUCT_ID)?;
        let quantity = find(QUANTITY)?;
        let price_per_item = find(PRICE_PER_ITEM)?;
        let order_date = find(ORDER_DATE)?;

        let required = [order_id, customer_id, product_id, quantity, price_per_item, order_date];
        // Derived columns from an earlier run are recomputed, not carried.
        let headers = table.headers();
        let extras = (0..headers.len())
            .filter(|i| !required.contains(i))
            .filter(|&i| !matches!(headers[i].as_str(), TOTAL_PRICE | TOTAL_SALES))
            .collect();

        Ok(ColumnLayout {
            order_id,
            customer_id,
            product_id,
            quantity,
            price_per_item,
            order_date,
            extras,
        })
    }
}

/// Cell values read as missing, on top of the empty cell.
const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parses a numeric cell.
///
/// Empty cells and the usual missing-value markers (`NA`, `NaN`, `null`, ...) are missing
/// values. Numbers that are valid but do not fit in a `Decimal` are an overflow; anything
/// else, including digit-group underscores, is a type error.
fn parse_number(raw: &str, column: &str, row: usize) -> Result<Option<Decimal>, TransformError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed) {
        return Ok(None);
    }

    let invalid = || TransformError::InvalidType {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    };

    if trimmed.contains('_') {
        return Err(invalid());
    }

    if let Ok(value) = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        return Ok(Some(value));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => Err(overflow(column, row)),
        _ => Err(invalid()),
    }
}

fn overflow(column: &str, row: usize) -> TransformError {
    TransformError::Overflow {
        column: column.to_string(),
        row,
    }
}
