use indexmap::IndexMap;
use tracing::info;

use crate::engine::core::bitmap::BitmapIndex;
use crate::engine::core::table::Table;
use crate::engine::errors::{QueryError, TableError};
use crate::engine::types::Row;

/// The fact table together with one bitmap index per indexed column.
///
/// Indexes are keyed by column name, in fact-table column order. A
/// `FactTable` is only produced by [`FactTableBuilder::finish`] and exposes
/// no way to change rows afterwards, so indexes never go stale.
#[derive(Debug, Clone)]
pub struct FactTable {
    table: Table,
    indexes: IndexMap<String, BitmapIndex>,
}

impl FactTable {
    /// Builds every index for `indexed_columns` over an already loaded table.
    pub fn from_table(table: Table, indexed_columns: &[String]) -> Result<Self, TableError> {
        let mut positions: Vec<(usize, &String)> = Vec::with_capacity(indexed_columns.len());
        for column in indexed_columns {
            positions.push((table.find_column_index(column)?, column));
        }
        positions.sort_by_key(|(pos, _)| *pos);
        positions.dedup_by_key(|(pos, _)| *pos);

        let mut indexes = IndexMap::with_capacity(positions.len());
        for (position, column) in positions {
            indexes.insert(
                column.clone(),
                BitmapIndex::build(column, position, table.rows()),
            );
        }

        info!(
            target: "bitfact::index",
            table = %table.name(),
            rows = table.row_count(),
            indexes = indexes.len(),
            "Fact table indexed"
        );
        Ok(Self { table, indexes })
    }

    #[inline]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.table.name()
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        self.table.rows()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn index(&self, column: &str) -> Option<&BitmapIndex> {
        self.indexes.get(column)
    }

    pub fn indexes(&self) -> impl Iterator<Item = &BitmapIndex> {
        self.indexes.values()
    }

    pub fn indexed_columns(&self) -> impl Iterator<Item = &str> {
        self.indexes.keys().map(String::as_str)
    }

    /// Resolves a predicate column: it must exist and carry a bitmap index.
    pub fn dimension_position(&self, column: &str) -> Result<usize, QueryError> {
        match self.table.position(column) {
            Some(pos) if self.indexes.contains_key(column) => Ok(pos),
            _ => Err(self.unknown_column(column)),
        }
    }

    /// Bitmap index of a predicate column; `UnknownColumn` when not indexed.
    pub fn dimension_index(&self, column: &str) -> Result<&BitmapIndex, QueryError> {
        self.indexes
            .get(column)
            .ok_or_else(|| self.unknown_column(column))
    }

    /// Resolves any column of the fact table (used for measures).
    pub fn column_position(&self, column: &str) -> Result<usize, QueryError> {
        self.table
            .position(column)
            .ok_or_else(|| self.unknown_column(column))
    }

    fn unknown_column(&self, column: &str) -> QueryError {
        QueryError::UnknownColumn {
            table: self.table.name().to_string(),
            column: column.to_string(),
        }
    }
}

/// Collects fact rows during load; `finish` builds the indexes once.
pub struct FactTableBuilder {
    table: Table,
    indexed_columns: Vec<String>,
}

impl FactTableBuilder {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            indexed_columns: Vec::new(),
        }
    }

    pub fn index_column(mut self, column: impl Into<String>) -> Result<Self, TableError> {
        let column = column.into();
        self.table.find_column_index(&column)?;
        self.indexed_columns.push(column);
        Ok(self)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn push_row(&mut self, row: Row) -> Result<(), TableError> {
        self.table.push_row(row)
    }

    pub fn push_raw<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<(), TableError> {
        self.table.push_raw(cells)
    }

    pub fn finish(self) -> Result<FactTable, TableError> {
        FactTable::from_table(self.table, &self.indexed_columns)
    }
}
