use crate::engine::core::bitmap::{BitmapIndex, BitmapIndexBuilder};
use crate::test_helpers::factories::TableFactory;

#[test]
fn build_sets_one_bit_per_row_in_the_matching_value() {
    let table = TableFactory::scenario().create();
    let index = BitmapIndex::build("D1", 1, table.rows());

    assert_eq!(index.row_count, 3);
    assert_eq!(index.value_count(), 2);
    assert_eq!(
        index.get("A").unwrap().iter_ones().collect::<Vec<_>>(),
        vec![0, 1]
    );
    assert_eq!(index.get("B").unwrap().iter_ones().collect::<Vec<_>>(), vec![2]);
    assert!(index.get("C").is_none());
    assert!(!index.contains("C"));
}

#[test]
fn built_index_is_a_partition_of_the_rows() {
    let table = TableFactory::random(500, 7).create();
    for (position, column) in [(1, "D1"), (2, "D2"), (3, "D3")] {
        let index = BitmapIndex::build(column, position, table.rows());
        assert!(index.is_partition(), "{} is not a partition", column);
        let total: usize = index
            .values()
            .map(|v| index.get(v).unwrap().count_ones())
            .sum();
        assert_eq!(total, 500);
    }
}

#[test]
fn overlapping_bitmaps_are_not_a_partition() {
    let mut builder = BitmapIndexBuilder::new("D1", 2);
    builder.add(0, "A");
    builder.add(1, "A");
    builder.add(1, "B");
    assert!(!builder.build().is_partition());

    let mut gap = BitmapIndexBuilder::new("D1", 3);
    gap.add(0, "A");
    gap.add(2, "B");
    assert!(!gap.build().is_partition());
}

#[test]
fn empty_table_builds_an_empty_index() {
    let table = TableFactory::new().create();
    let index = BitmapIndex::build("D1", 1, table.rows());
    assert_eq!(index.value_count(), 0);
    assert!(index.is_partition());
}
