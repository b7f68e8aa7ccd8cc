use crate::test_helpers::factory::Factory;

#[test]
fn test_fact_table_factory_indexes_dimensions() {
    let fact = Factory::fact_table()
        .with_row(&["1", "A", "X", "I", "10", "100"])
        .with_row(&["2", "B", "Y", "J", "20", "200"])
        .with_indexed(&["D1", "D3"])
        .create();

    assert_eq!(fact.indexed_columns().collect::<Vec<_>>(), vec!["D1", "D3"]);
    assert_eq!(fact.index("D3").unwrap().value_count(), 2);
}
