pub mod error;
pub mod filter_peg;

pub use error::ParseError;
pub use filter_peg::{parse_aggregates, parse_filter};
