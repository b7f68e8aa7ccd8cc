use serde::Serialize;

use crate::engine::core::filter::{DimensionMatch, Expression};
use crate::engine::core::read::aggregate::ops::AggregateResults;

/// Result of a query evaluated without the bitmap indexes.
///
/// `results` is empty when no row matched the expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanOutcome {
    pub expression: Expression,
    pub results: AggregateResults,
}

/// Result of a query evaluated through the bitmap indexes, annotated with
/// the dimension rows each predicate refers to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedOutcome {
    #[serde(rename = "indexed_columns")]
    pub matched_dimension_rows: Vec<DimensionMatch>,
    pub results: AggregateResults,
}
