use std::time::Instant;

use tracing::debug;

use crate::engine::core::fact::FactTable;
use crate::engine::core::filter::{
    BitmapEvaluator, Expression, ScanEvaluator, format_conditions,
};
use crate::engine::core::read::aggregate::ops::{AggregateResults, apply_aggregates, dedup_rows};
use crate::engine::core::read::aggregate::plan::{AggregatePlan, AggregateRequest};
use crate::engine::core::table::Table;
use crate::engine::errors::QueryError;
use crate::engine::query::outcome::{IndexedOutcome, ScanOutcome};
use crate::engine::types::Row;

impl FactTable {
    /// Row multiset selected by a linear scan (duplicates across groups kept).
    pub fn search_without_indexes(&self, expression: &Expression) -> Result<Vec<&Row>, QueryError> {
        ScanEvaluator::new(self).select(expression)
    }

    /// Rows selected through the bitmap indexes, in table order.
    pub fn search_with_bitmap(&self, expression: &Expression) -> Result<Vec<&Row>, QueryError> {
        BitmapEvaluator::new(self).select(expression)
    }

    pub fn evaluate_without_index(
        &self,
        expression: &Expression,
        requests: &[AggregateRequest],
    ) -> Result<ScanOutcome, QueryError> {
        let start = Instant::now();
        let plan = AggregatePlan::resolve(self, requests)?;
        let rows = self.search_without_indexes(expression)?;
        let results = aggregate_selected(&plan, rows)?;

        debug!(
            target: "bitfact::query",
            path = "scan",
            groups = expression.groups().len(),
            predicates = expression.predicate_count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query evaluated"
        );
        Ok(ScanOutcome {
            expression: expression.clone(),
            results,
        })
    }

    pub fn evaluate_with_index(
        &self,
        dimensions: &[&Table],
        expression: &Expression,
        requests: &[AggregateRequest],
    ) -> Result<IndexedOutcome, QueryError> {
        let start = Instant::now();
        let plan = AggregatePlan::resolve(self, requests)?;
        let rows = self.search_with_bitmap(expression)?;
        let matched_dimension_rows = format_conditions(expression, dimensions);
        let results = aggregate_selected(&plan, rows)?;

        debug!(
            target: "bitfact::query",
            path = "bitmap",
            groups = expression.groups().len(),
            predicates = expression.predicate_count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query evaluated"
        );
        Ok(IndexedOutcome {
            matched_dimension_rows,
            results,
        })
    }
}

/// Shared tail of both paths: de-duplicate, then aggregate.
/// No matched rows means no aggregation at all.
fn aggregate_selected(plan: &AggregatePlan, rows: Vec<&Row>) -> Result<AggregateResults, QueryError> {
    if rows.is_empty() {
        debug!(target: "bitfact::query", "No rows matched, skipping aggregation");
        return Ok(AggregateResults::new());
    }
    let selected = rows.len();
    let unique = dedup_rows(rows);
    debug!(
        target: "bitfact::query",
        selected,
        unique = unique.len(),
        "Rows selected"
    );
    apply_aggregates(plan, &unique)
}
