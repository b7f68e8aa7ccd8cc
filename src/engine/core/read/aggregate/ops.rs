use std::collections::HashSet;

use indexmap::IndexMap;

use crate::engine::core::read::aggregate::plan::{AggregateFunction, AggregatePlan, ResolvedAggregate};
use crate::engine::errors::QueryError;
use crate::engine::types::Row;

/// Aggregate results keyed by measure column, in request order.
pub type AggregateResults = IndexMap<String, f64>;

/// Aggregator enum with concrete implementations per function
#[derive(Debug, Clone, PartialEq)]
pub enum AggregatorImpl {
    Min(Min),
    Max(Max),
    Avg(Avg),
    Sum(Sum),
    Count(Count),
}

impl AggregatorImpl {
    pub fn from_function(function: AggregateFunction) -> Self {
        match function {
            AggregateFunction::Min => Self::Min(Min::default()),
            AggregateFunction::Max => Self::Max(Max::default()),
            AggregateFunction::Avg => Self::Avg(Avg::default()),
            AggregateFunction::Sum => Self::Sum(Sum::default()),
            AggregateFunction::Count => Self::Count(Count::default()),
        }
    }

    pub fn function(&self) -> AggregateFunction {
        match self {
            AggregatorImpl::Min(_) => AggregateFunction::Min,
            AggregatorImpl::Max(_) => AggregateFunction::Max,
            AggregatorImpl::Avg(_) => AggregateFunction::Avg,
            AggregatorImpl::Sum(_) => AggregateFunction::Sum,
            AggregatorImpl::Count(_) => AggregateFunction::Count,
        }
    }

    /// Feeds one numeric cell value.
    pub fn update(&mut self, value: f64) {
        match self {
            AggregatorImpl::Min(a) => a.update(value),
            AggregatorImpl::Max(a) => a.update(value),
            AggregatorImpl::Avg(a) => a.update(value),
            AggregatorImpl::Sum(a) => a.update(value),
            AggregatorImpl::Count(a) => a.update(),
        }
    }

    /// `None` when the function has no defined value over zero inputs.
    pub fn finalize(&self) -> Option<f64> {
        match self {
            AggregatorImpl::Min(a) => a.min,
            AggregatorImpl::Max(a) => a.max,
            AggregatorImpl::Avg(a) => (a.count > 0).then(|| a.sum / a.count as f64),
            AggregatorImpl::Sum(a) => (a.count > 0).then_some(a.sum),
            AggregatorImpl::Count(a) => Some(a.count as f64),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Min {
    pub min: Option<f64>,
}

impl Min {
    pub fn update(&mut self, value: f64) {
        self.min = Some(self.min.map_or(value, |current| current.min(value)));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Max {
    pub max: Option<f64>,
}

impl Max {
    pub fn update(&mut self, value: f64) {
        self.max = Some(self.max.map_or(value, |current| current.max(value)));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Avg {
    pub sum: f64,
    pub count: u64,
}

impl Avg {
    pub fn update(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sum {
    pub sum: f64,
    pub count: u64,
}

impl Sum {
    pub fn update(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Count {
    pub count: u64,
}

impl Count {
    pub fn update(&mut self) {
        self.count += 1;
    }
}

/// Drops rows equal to an earlier row, keeping first-seen order.
pub fn dedup_rows<'a>(rows: Vec<&'a Row>) -> Vec<&'a Row> {
    let mut seen: HashSet<&'a Row> = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|row| seen.insert(*row)).collect()
}

/// Runs every planned aggregate over `rows`, reading numeric cells only.
///
/// Text cells are skipped per column; they do not exclude the row from the
/// other aggregates.
pub fn apply_aggregates(plan: &AggregatePlan, rows: &[&Row]) -> Result<AggregateResults, QueryError> {
    let mut results = AggregateResults::with_capacity(plan.ops.len());
    for op in &plan.ops {
        results.insert(op.column.clone(), aggregate_column(op, rows)?);
    }
    Ok(results)
}

fn aggregate_column(op: &ResolvedAggregate, rows: &[&Row]) -> Result<f64, QueryError> {
    let mut agg = AggregatorImpl::from_function(op.function);
    for value in rows.iter().filter_map(|row| row[op.position].as_f64()) {
        agg.update(value);
    }
    agg.finalize().ok_or_else(|| QueryError::EmptyAggregate {
        column: op.column.clone(),
        function: op.function,
    })
}
