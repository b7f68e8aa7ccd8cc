use crate::engine::core::fact::FactTable;
use crate::engine::core::filter::Expression;
use crate::engine::core::read::aggregate::plan::AggregateRequest;
use crate::engine::core::table::Table;
use crate::engine::errors::QueryError;
use crate::engine::query::outcome::IndexedOutcome;

/// The loaded fact table and its dimension lookup tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub fact: FactTable,
    pub dimensions: Vec<Table>,
}

impl Catalog {
    pub fn new(fact: FactTable, dimensions: Vec<Table>) -> Self {
        Self { fact, dimensions }
    }

    pub fn dimension(&self, name: &str) -> Option<&Table> {
        self.dimensions.iter().find(|t| t.name() == name)
    }

    /// Dimension tables named by the expression, in first-mention order.
    pub fn referenced_dimensions(&self, expression: &Expression) -> Vec<&Table> {
        let mut tables: Vec<&Table> = Vec::new();
        for predicate in expression.predicates() {
            if tables.iter().any(|t| t.name() == predicate.column) {
                continue;
            }
            if let Some(table) = self.dimension(&predicate.column) {
                tables.push(table);
            }
        }
        tables
    }

    /// Bitmap-path evaluation with the referenced dimensions resolved here.
    pub fn evaluate_with_index(
        &self,
        expression: &Expression,
        requests: &[AggregateRequest],
    ) -> Result<IndexedOutcome, QueryError> {
        let dimensions = self.referenced_dimensions(expression);
        self.fact.evaluate_with_index(&dimensions, expression, requests)
    }
}
