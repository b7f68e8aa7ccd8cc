use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::core::table::Table;
use crate::loader::generate::{FACT_COLUMNS, random_fact_row};

pub struct TableFactory {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableFactory {
    pub fn new() -> Self {
        Self {
            name: "Fact".into(),
            columns: FACT_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// `(id, D1, D2, measure)` with rows `(1,A,X,10) (2,A,Y,20) (3,B,X,30)`.
    pub fn scenario() -> Self {
        Self::new()
            .with_columns(&["id", "D1", "D2", "measure"])
            .with_row(&["1", "A", "X", "10"])
            .with_row(&["2", "A", "Y", "20"])
            .with_row(&["3", "B", "X", "30"])
    }

    /// Generated fact rows, reproducible for a given seed.
    pub fn random(rows: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut factory = Self::new();
        for i in 1..=rows {
            factory.rows.push(random_fact_row(i, &mut rng));
        }
        factory
    }

    pub fn dimension_d1() -> Self {
        Self::new()
            .with_name("D1")
            .with_columns(&["D1", "Alfa", "Beta", "Gamma"])
            .with_row(&["A", "Alfa1", "Beta1", "Gamma1"])
            .with_row(&["B", "Alfa2", "Beta2", "Gamma2"])
    }

    pub fn dimension_d2() -> Self {
        Self::new()
            .with_name("D2")
            .with_columns(&["D2", "Delta"])
            .with_row(&["X", "Delta1"])
            .with_row(&["Y", "Delta2"])
            .with_row(&["Z", "Delta3"])
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| (*c).to_string()).collect();
        self
    }

    pub fn with_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|c| (*c).to_string()).collect());
        self
    }

    pub fn create(self) -> Table {
        let mut table = Table::new(self.name, self.columns).unwrap();
        for row in &self.rows {
            table.push_raw(row.as_slice()).unwrap();
        }
        table
    }
}
