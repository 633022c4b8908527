use crate::sales::TransformedSales;
use core_types::SalesRow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The outcome of a single data-quality constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub description: String,
    pub passed: usize,
    pub total: usize,
    pub pass_rate_pct: Option<Decimal>, // Option<> because an empty table has no rate
    pub success: bool,
}

/// A standardized report of every data-quality constraint evaluated over a transformed table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_rows: usize,
    pub checks: Vec<CheckResult>,
}

impl QualityReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.success)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.success)
    }

    pub fn check(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }
}

/// Evaluates data-quality constraints over transformed sales data.
#[derive(Debug, Clone)]
pub struct QualityValidator {
    max_quantity: Decimal,
}

impl Default for QualityValidator {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl QualityValidator {
    pub fn new(max_quantity: u64) -> Self {
        Self {
            max_quantity: Decimal::from(max_quantity),
        }
    }

    pub fn validate(&self, sales: &TransformedSales) -> QualityReport {
        let rows = &sales.rows;

        let mut seen = HashSet::with_capacity(rows.len());
        let unique_ids = rows
            .iter()
            .filter(|r| seen.insert(r.order_id.as_str()))
            .count();

        let checks = vec![
            result(
                "order_id_unique",
                "Order ID unique",
                unique_ids,
                rows.len(),
            ),
            count(rows, "customer_id_present", "Customer ID present", |r| {
                !r.customer_id.trim().is_empty()
            }),
            count(rows, "product_id_present", "Product ID present", |r| {
                !r.product_id.trim().is_empty()
            }),
            count(rows, "quantity_in_range", "Quantity within valid range", |r| {
                r.quantity > Decimal::ZERO && r.quantity <= self.max_quantity
            }),
            count(rows, "price_per_item_positive", "Price per item positive", |r| {
                r.price_per_item.is_some_and(|p| p > Decimal::ZERO)
            }),
            count(rows, "order_date_valid", "Order date format valid", |r| {
                r.order_date.is_some()
            }),
            count(rows, "total_sales_non_negative", "Total sales non-negative", |_| {
                sales.total_sales >= Decimal::ZERO
            }),
        ];

        let report = QualityReport {
            total_rows: rows.len(),
            checks,
        };

        for failed in report.failed_checks() {
            tracing::warn!(
                check = %failed.name,
                passed = failed.passed,
                total = failed.total,
                "Data-quality check failed."
            );
        }

        report
    }
}

fn count<F>(rows: &[SalesRow], name: &str, description: &str, predicate: F) -> CheckResult
where
    F: Fn(&SalesRow) -> bool,
{
    let passed = rows.iter().filter(|r| predicate(r)).count();
    result(name, description, passed, rows.len())
}

fn result(name: &str, description: &str, passed: usize, total: usize) -> CheckResult {
    let pass_rate_pct = (total > 0).then(|| {
        (Decimal::from(passed) / Decimal::from(total) * Decimal::from(100)).round_dp(2)
    });

    CheckResult {
        name: name.to_string(),
        description: description.to_string(),
        passed,
        total,
        pass_rate_pct,
        success: passed == total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SalesTransformer;
    use core_types::DataTable;
    use rust_decimal_macros::dec;

    fn transformed(rows: &[[&str; 6]]) -> TransformedSales {
        let table = DataTable::with_rows(
            core_types::REQUIRED_COLUMNS,
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap();
        SalesTransformer::new().transform(&table).unwrap()
    }

    #[test]
    fn clean_data_passes_every_check() {
        let sales = transformed(&[
            ["1", "101", "501", "10", "2.5", "2025-09-01"],
            ["2", "102", "502", "5", "5.0", "2025-09-02"],
            ["3", "103", "501", "3", "2.5", "2025-09-03"],
        ]);

        let report = QualityValidator::default().validate(&sales);

        assert!(report.all_passed());
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.checks.len(), 7);
        let sales_check = report.check("total_sales_non_negative").unwrap();
        assert_eq!(sales_check.pass_rate_pct, Some(dec!(100)));
    }

    #[test]
    fn duplicates_and_bad_values_are_counted() {
        let sales = transformed(&[
            ["1", "101", "501", "10", "2.5", "2025-09-01"],
            ["1", "", "502", "20000", "5.0", "garbage"],
            ["2", "103", "503", "3", "-1", "2025-09-03"],
            ["3", "104", "504", "1", "1", "2025-09-04"],
        ]);

        let report = QualityValidator::new(10_000).validate(&sales);

        assert!(!report.all_passed());
        let unique = report.check("order_id_unique").unwrap();
        assert_eq!((unique.passed, unique.total), (3, 4));
        assert_eq!(unique.pass_rate_pct, Some(dec!(75)));
        assert_eq!(report.check("customer_id_present").unwrap().passed, 3);
        assert_eq!(report.check("quantity_in_range").unwrap().passed, 3);
        assert_eq!(report.check("price_per_item_positive").unwrap().passed, 3);
        assert_eq!(report.check("order_date_valid").unwrap().passed, 3);
        assert!(report.check("product_id_present").unwrap().success);

        let failed: Vec<_> = report.failed_checks().map(|c| c.name.as_str()).collect();
        assert_eq!(
            failed,
            vec![
                "order_id_unique",
                "customer_id_present",
                "quantity_in_range",
                "price_per_item_positive",
                "order_date_valid"
            ]
        );
    }

    #[test]
    fn empty_table_has_no_rates() {
        let sales = transformed(&[]);

        let report = QualityValidator::default().validate(&sales);

        assert!(report.all_passed());
        assert!(report.checks.iter().all(|c| c.pass_rate_pct.is_none()));
    }

    #[test]
    fn report_serializes_to_json() {
        let sales = transformed(&[["1", "101", "501", "1", "1", "2025-09-01"]]);
        let report = QualityValidator::default().validate(&sales);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_rows"], 1);
        assert_eq!(json["checks"][0]["name"], "order_id_unique");
    }
}
