use crate::error::LoaderError;
use core_types::DataTable;
use std::fs::File;
use std::path::Path;
use transform::TransformedSales;

/// Reads a CSV file with a header row into a `DataTable`.
///
/// Every cell is kept as text; typing is left to the transformation step.
/// Rows whose width differs from the header are rejected.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataTable, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if headers.is_empty() {
        return Err(LoaderError::EmptyFile(path.to_path_buf()));
    }

    let mut table = DataTable::new(headers);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(String::from).collect())?;
    }

    tracing::debug!(path = %path.display(), rows = table.len(), "CSV file read.");
    Ok(table)
}

/// Writes a `DataTable` to a CSV file, header row first. An existing file is truncated.
pub fn write_csv<P: AsRef<Path>>(table: &DataTable, path: P) -> Result<(), LoaderError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush().map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = table.len(), "CSV file written.");
    Ok(())
}

/// Writes a transformed sales table, derived columns included.
pub fn write_transformed<P: AsRef<Path>>(
    sales: &TransformedSales,
    path: P,
) -> Result<(), LoaderError> {
    write_csv(&sales.to_table()?, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::CoreError;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::tempdir;

    fn sales_table() -> DataTable {
        DataTable::with_rows(
            core_types::REQUIRED_COLUMNS,
            vec![
                ["1", "101", "501", "2", "10.0", "2023-09-01"],
                ["2", "102", "502", "3", "20.0", "2023-09-02"],
            ]
            .into_iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
        )
        .unwrap()
    }

    #[test]
    fn write_then_read_preserves_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.csv");

        write_csv(&sales_table(), &path).unwrap();
        assert!(path.exists());

        let loaded = read_csv(&path).unwrap();
        assert_eq!(loaded.shape(), (2, 6));
        assert_eq!(loaded, sales_table());
    }

    #[test]
    fn quoted_cells_survive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        let table = DataTable::with_rows(
            ["name", "note"],
            vec![vec!["Widget, large".to_string(), "say \"hi\"".to_string()]],
        )
        .unwrap();

        write_csv(&table, &path).unwrap();

        assert_eq!(read_csv(&path).unwrap(), table);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = read_csv(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "col1,col2\n1,2\n3\n").unwrap();

        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, LoaderError::Csv(_)));
    }

    #[test]
    fn empty_file_has_no_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, LoaderError::EmptyFile(_)));
    }

    #[test]
    fn header_only_table_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("header_only.csv");

        write_csv(&DataTable::new(["a", "b"]), &path).unwrap();

        let loaded = read_csv(&path).unwrap();
        assert_eq!(loaded.shape(), (0, 2));
    }

    #[test]
    fn mismatched_sales_rows_are_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mismatched.csv");
        // One extra column is declared, but the row carries no extra value.
        let sales = TransformedSales {
            extra_columns: vec!["product".to_string()],
            rows: vec![core_types::SalesRow {
                order_id: "1".into(),
                customer_id: "101".into(),
                product_id: "501".into(),
                quantity: dec!(2),
                price_per_item: Some(dec!(10.0)),
                order_date: None,
                total_price: Some(dec!(20.0)),
                extras: vec![],
            }],
            total_sales: dec!(20.0),
        };

        let err = write_transformed(&sales, &path).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Core(CoreError::RowWidthMismatch {
                row: 0,
                expected: 9,
                found: 8
            })
        ));
        assert!(!path.exists());
    }
}
