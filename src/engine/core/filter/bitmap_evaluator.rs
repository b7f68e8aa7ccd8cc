use crate::engine::core::bitmap::BitVector;
use crate::engine::core::fact::FactTable;
use crate::engine::core::filter::expression::Expression;
use crate::engine::errors::QueryError;
use crate::engine::types::Row;

/// Row selection through bitmap AND (within a group) and OR (across groups).
#[derive(Debug)]
pub struct BitmapEvaluator<'a> {
    fact: &'a FactTable,
}

impl<'a> BitmapEvaluator<'a> {
    pub fn new(fact: &'a FactTable) -> Self {
        Self { fact }
    }

    /// Combined selection bitmap for the whole expression.
    pub fn evaluate(&self, expression: &Expression) -> Result<BitVector, QueryError> {
        let row_count = self.fact.row_count();
        let mut combined = BitVector::zeros(row_count);

        for group in expression.groups() {
            let mut group_bits = BitVector::ones(row_count);
            for predicate in group.predicates() {
                let index = self.fact.dimension_index(&predicate.column)?;
                let bits = index.get(&predicate.value).ok_or_else(|| {
                    QueryError::UnknownDimensionValue {
                        column: predicate.column.clone(),
                        value: predicate.value.clone(),
                    }
                })?;
                group_bits.and_assign(bits);
            }
            combined.or_assign(&group_bits);
        }

        Ok(combined)
    }

    /// Rows whose bit is set in the combined bitmap, in table order.
    pub fn select(&self, expression: &Expression) -> Result<Vec<&'a Row>, QueryError> {
        let rows = self.fact.rows();
        let bits = self.evaluate(expression)?;
        Ok(bits.iter_ones().map(|idx| &rows[idx]).collect())
    }
}
