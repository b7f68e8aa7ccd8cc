pub mod catalog;
pub mod execution_engine;
pub mod outcome;

pub use catalog::Catalog;
pub use outcome::{IndexedOutcome, ScanOutcome};
