pub mod data;
pub mod errors;
pub mod generate;
pub mod schema;

pub use data::{fill_tables, load_catalog};
pub use errors::LoadError;
pub use schema::{Schema, TableSchema, parse_schema, read_schema};
