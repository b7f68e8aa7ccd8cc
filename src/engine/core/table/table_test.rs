use crate::engine::core::table::Table;
use crate::engine::errors::TableError;
use crate::test_helpers::factories::TableFactory;

#[test]
fn new_table_resolves_columns_by_name() {
    let table = Table::new("Fact", vec!["ID", "D1", "D2", "Fact1"]).unwrap();
    assert_eq!(table.name(), "Fact");
    assert_eq!(table.position("ID"), Some(0));
    assert_eq!(table.position("Fact1"), Some(3));
    assert_eq!(table.position("missing"), None);
    assert!(table.is_empty());
}

#[test]
fn duplicate_column_names_are_rejected() {
    let err = Table::new("Fact", vec!["ID", "D1", "D1"]).unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateColumn {
            table: "Fact".into(),
            column: "D1".into()
        }
    );
}

#[test]
fn find_column_index_reports_unknown_column() {
    let table = Table::new("D2", vec!["D2", "Delta"]).unwrap();
    assert_eq!(table.find_column_index("Delta"), Ok(1));
    assert!(matches!(
        table.find_column_index("Gamma"),
        Err(TableError::UnknownColumn { ref column, .. }) if column == "Gamma"
    ));
}

#[test]
fn push_raw_checks_row_width() {
    let mut table = Table::new("D1", vec!["D1", "Alfa"]).unwrap();
    table.push_raw(&["A", "Alfa1"]).unwrap();

    let err = table.push_raw(&["B"]).unwrap_err();
    assert_eq!(
        err,
        TableError::RowWidthMismatch {
            table: "D1".into(),
            row: 1,
            expected: 2,
            found: 1
        }
    );
    assert_eq!(table.row_count(), 1);
}

#[test]
fn factory_builds_rows_with_classified_cells() {
    let table = TableFactory::new()
        .with_name("Fact")
        .with_columns(&["id", "D1", "measure"])
        .with_row(&["1", "A", "10"])
        .with_row(&["2", "B", "n/a"])
        .create();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0][2].as_f64(), Some(10.0));
    assert!(!table.rows()[1][2].is_numeric());
}
