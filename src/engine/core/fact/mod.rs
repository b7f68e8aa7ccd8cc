pub mod fact_table;

pub use fact_table::{FactTable, FactTableBuilder};
