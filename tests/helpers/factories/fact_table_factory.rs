use crate::engine::core::fact::{FactTable, FactTableBuilder};
use crate::test_helpers::factories::TableFactory;

pub struct FactTableFactory {
    table: TableFactory,
    indexed: Vec<String>,
}

impl FactTableFactory {
    pub fn new() -> Self {
        Self {
            table: TableFactory::new(),
            indexed: vec!["D1".into(), "D2".into(), "D3".into()],
        }
    }

    /// Scenario table indexed on `D1` and `D2`.
    pub fn scenario() -> Self {
        Self {
            table: TableFactory::scenario(),
            indexed: vec!["D1".into(), "D2".into()],
        }
    }

    pub fn random(rows: usize, seed: u64) -> Self {
        Self {
            table: TableFactory::random(rows, seed),
            ..Self::new()
        }
    }

    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.table = self.table.with_columns(columns);
        self
    }

    pub fn with_row(mut self, cells: &[&str]) -> Self {
        self.table = self.table.with_row(cells);
        self
    }

    pub fn with_indexed(mut self, columns: &[&str]) -> Self {
        self.indexed = columns.iter().map(|c| (*c).to_string()).collect();
        self
    }

    pub fn create(self) -> FactTable {
        let mut builder = FactTableBuilder::new(self.table.create());
        for column in self.indexed {
            builder = builder.index_column(column).unwrap();
        }
        builder.finish().unwrap()
    }
}
