use thiserror::Error;
use tracing::{debug, error};

use crate::engine::core::read::aggregate::plan::AggregateFunction;

/// Errors that can occur while evaluating a query against the fact table.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Column '{column}' does not exist in the table '{table}'")]
    UnknownColumn { table: String, column: String },

    #[error("Value '{value}' is not referenced in the bitmap index of '{column}'")]
    UnknownDimensionValue { column: String, value: String },

    #[error("{function} over '{column}' has no numeric values to aggregate")]
    EmptyAggregate {
        column: String,
        function: AggregateFunction,
    },

    #[error("Unknown aggregate function: {0}")]
    UnknownAggregateFunction(String),

    #[error("Column '{0}' is aggregated more than once in the same request")]
    DuplicateAggregate(String),

    #[error("Aggregate '{0}' is not of the form func:column")]
    MalformedAggregate(String),
}

impl QueryError {
    pub fn log_error(&self) {
        match self {
            QueryError::UnknownColumn { table, column } => {
                error!("Unknown column {} in {}", column, table);
                debug!("Unknown column error details: {:?}", self);
            }
            QueryError::UnknownDimensionValue { column, value } => {
                error!("Unknown dimension value {}={}", column, value);
                debug!("Bitmap index lookup failed; the query literal or index is stale");
            }
            QueryError::EmptyAggregate { column, function } => {
                error!("Empty aggregate {} over {}", function, column);
                debug!("Empty aggregate error details: {:?}", self);
            }
            QueryError::UnknownAggregateFunction(name) => {
                error!("Unknown aggregate function: {}", name);
                debug!("Expected one of MIN, MAX, AVG, SUM, COUNT");
            }
            QueryError::DuplicateAggregate(column) => {
                error!("Duplicate aggregate column: {}", column);
                debug!("Duplicate aggregate error details: {:?}", self);
            }
            QueryError::MalformedAggregate(text) => {
                error!("Malformed aggregate request: {}", text);
                debug!("Expected func:column, e.g. avg:Fact1");
            }
        }
    }
}

/// Errors raised while shaping a table or its indexes.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("Row {row} of table '{table}' has {found} values, expected {expected}")]
    RowWidthMismatch {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' does not exist in the table '{table}'")]
    UnknownColumn { table: String, column: String },
}

impl TableError {
    pub fn log_error(&self) {
        match self {
            TableError::DuplicateColumn { table, column } => {
                error!("Duplicate column {} in {}", column, table);
            }
            TableError::RowWidthMismatch {
                table,
                row,
                expected,
                found,
            } => {
                error!(
                    "Row {} of {} has {} values, expected {}",
                    row, table, found, expected
                );
                debug!("Check the data block of {} for missing or extra commas", table);
            }
            TableError::UnknownColumn { table, column } => {
                error!("Cannot index unknown column {} of {}", column, table);
            }
        }
    }
}
