use std::collections::HashMap;

use tracing::debug;

use crate::engine::core::bitmap::bit_vector::BitVector;
use crate::engine::types::Row;

/// Per-value bitmaps for one indexed column of the fact table.
///
/// Every bitmap is `row_count` bits long and, across all values of the
/// column, each row is set in exactly one bitmap.
#[derive(Debug, Clone, Default)]
pub struct BitmapIndex {
    pub column: String,
    pub row_count: usize,
    bitmaps: HashMap<String, BitVector>,
}

impl BitmapIndex {
    /// Builds the index for `position` over fully materialized `rows`.
    pub fn build(column: &str, position: usize, rows: &[Row]) -> Self {
        let mut builder = BitmapIndexBuilder::new(column, rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            builder.add(row_idx, row[position].as_str());
        }
        let index = builder.build();
        debug!(
            target: "bitfact::index",
            column = %index.column,
            rows = index.row_count,
            values = index.value_count(),
            "Built bitmap index"
        );
        index
    }

    #[inline]
    pub fn get(&self, value: &str) -> Option<&BitVector> {
        self.bitmaps.get(value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.bitmaps.contains_key(value)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.bitmaps.keys().map(String::as_str)
    }

    pub fn value_count(&self) -> usize {
        self.bitmaps.len()
    }

    /// Checks that the value bitmaps are pairwise disjoint and cover every row.
    pub fn is_partition(&self) -> bool {
        let mut union = BitVector::zeros(self.row_count);
        for bits in self.bitmaps.values() {
            if bits.len() != self.row_count || !union.is_disjoint(bits) {
                return false;
            }
            union.or_assign(bits);
        }
        union == BitVector::ones(self.row_count)
    }
}

pub struct BitmapIndexBuilder {
    column: String,
    row_count: usize,
    bitmaps: HashMap<String, BitVector>,
}

impl BitmapIndexBuilder {
    pub fn new(column: &str, row_count: usize) -> Self {
        Self {
            column: column.to_string(),
            row_count,
            bitmaps: HashMap::new(),
        }
    }

    pub fn add(&mut self, row_idx: usize, value: &str) {
        let row_count = self.row_count;
        self.bitmaps
            .entry(value.to_string())
            .or_insert_with(|| BitVector::zeros(row_count))
            .set(row_idx);
    }

    pub fn build(self) -> BitmapIndex {
        BitmapIndex {
            column: self.column,
            row_count: self.row_count,
            bitmaps: self.bitmaps,
        }
    }
}
