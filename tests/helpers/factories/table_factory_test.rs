use crate::test_helpers::factory::Factory;
use crate::test_helpers::factories::TableFactory;

#[test]
fn test_table_factory_defaults() {
    let table = Factory::table().create();
    assert_eq!(table.name(), "Fact");
    assert_eq!(table.columns(), &["ID", "D1", "D2", "D3", "Fact1", "Fact2"]);
    assert!(table.is_empty());
}

#[test]
fn test_random_table_is_reproducible() {
    let a = TableFactory::random(50, 1).create();
    let b = TableFactory::random(50, 1).create();
    assert_eq!(a.rows(), b.rows());
    assert_eq!(a.row_count(), 50);
    assert_eq!(a.rows()[49][0].as_str(), "50");
}
