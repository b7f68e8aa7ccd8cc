use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::core::fact::FactTable;
use crate::engine::errors::QueryError;

/// Aggregate functions available over a measure column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregateFunction {
    Min,
    Max,
    Avg,
    Sum,
    Count,
}

impl AggregateFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Min => "MIN",
            AggregateFunction::Max => "MAX",
            AggregateFunction::Avg => "AVG",
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Count => "COUNT",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateFunction {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MIN" => Ok(AggregateFunction::Min),
            "MAX" => Ok(AggregateFunction::Max),
            "AVG" => Ok(AggregateFunction::Avg),
            "SUM" | "TOTAL" => Ok(AggregateFunction::Sum),
            "COUNT" => Ok(AggregateFunction::Count),
            _ => Err(QueryError::UnknownAggregateFunction(s.trim().to_string())),
        }
    }
}

/// One `(measure column, function)` pair of an aggregate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRequest {
    pub column: String,
    pub function: AggregateFunction,
}

impl AggregateRequest {
    pub fn new(column: impl Into<String>, function: AggregateFunction) -> Self {
        Self {
            column: column.into(),
            function,
        }
    }
}

impl FromStr for AggregateRequest {
    type Err = QueryError;

    /// Parses `func:column`, e.g. `avg:Fact1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((function, column)) = s.split_once(':') else {
            return Err(QueryError::MalformedAggregate(s.to_string()));
        };
        if column.trim().is_empty() {
            return Err(QueryError::MalformedAggregate(s.to_string()));
        }
        Ok(Self::new(column.trim(), function.parse()?))
    }
}

/// Aggregate requests resolved against the fact table's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatePlan {
    pub ops: Vec<ResolvedAggregate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAggregate {
    pub column: String,
    pub position: usize,
    pub function: AggregateFunction,
}

impl AggregatePlan {
    /// Fails on unknown columns and on a column requested twice.
    pub fn resolve(fact: &FactTable, requests: &[AggregateRequest]) -> Result<Self, QueryError> {
        let mut seen = HashSet::with_capacity(requests.len());
        let mut ops = Vec::with_capacity(requests.len());
        for request in requests {
            let position = fact.column_position(&request.column)?;
            if !seen.insert(request.column.as_str()) {
                return Err(QueryError::DuplicateAggregate(request.column.clone()));
            }
            ops.push(ResolvedAggregate {
                column: request.column.clone(),
                position,
                function: request.function,
            });
        }
        Ok(Self { ops })
    }
}
