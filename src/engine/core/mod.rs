pub mod bitmap;
pub mod fact;
pub mod filter;
pub mod read;
pub mod table;

pub use bitmap::{BitVector, BitmapIndex};
pub use fact::{FactTable, FactTableBuilder};
pub use filter::{AndGroup, DimensionMatch, Expression, Predicate};
pub use read::aggregate::ops::AggregateResults;
pub use read::aggregate::plan::{AggregateFunction, AggregateRequest};
pub use table::Table;
