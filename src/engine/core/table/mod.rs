pub mod table;

pub use table::Table;

#[cfg(test)]
mod table_test;
