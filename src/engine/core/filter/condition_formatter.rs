use serde::Serialize;

use crate::engine::core::filter::expression::Expression;
use crate::engine::core::table::Table;
use crate::engine::types::Row;

/// Dimension rows described by one predicate of the expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionMatch {
    pub column: String,
    pub value: String,
    pub rows: Vec<Row>,
}

/// Annotates each predicate with the matching rows of its dimension table.
///
/// A dimension table is used for a predicate when its name equals the
/// predicate column. The value is compared against the dimension table's
/// column of the same name, or its first column when there is none.
/// Predicates with no supplied dimension table produce no entry.
pub fn format_conditions(expression: &Expression, dimensions: &[&Table]) -> Vec<DimensionMatch> {
    let mut formatted = Vec::new();
    for predicate in expression.predicates() {
        for table in dimensions.iter().filter(|t| t.name() == predicate.column) {
            if table.columns().is_empty() {
                continue;
            }
            let position = table.position(&predicate.column).unwrap_or(0);
            let rows: Vec<Row> = table
                .rows()
                .iter()
                .filter(|row| row[position].as_str() == predicate.value)
                .cloned()
                .collect();
            formatted.push(DimensionMatch {
                column: predicate.column.clone(),
                value: predicate.value.clone(),
                rows,
            });
        }
    }
    formatted
}
