use crate::engine::core::fact::FactTable;
use crate::engine::core::filter::expression::Expression;
use crate::engine::errors::QueryError;
use crate::engine::types::Row;

/// Row selection by linear scan; ignores the bitmap indexes entirely.
#[derive(Debug)]
pub struct ScanEvaluator<'a> {
    fact: &'a FactTable,
}

impl<'a> ScanEvaluator<'a> {
    pub fn new(fact: &'a FactTable) -> Self {
        Self { fact }
    }

    /// Returns every row satisfying at least one AND-group, once per
    /// satisfied group. Rows matched by several groups appear repeatedly.
    pub fn select(&self, expression: &Expression) -> Result<Vec<&'a Row>, QueryError> {
        let groups = self.resolve(expression)?;
        let rows = self.fact.rows();

        let mut selected = Vec::new();
        for group in &groups {
            for row in rows {
                if group
                    .iter()
                    .all(|(position, value)| row[*position].as_str() == *value)
                {
                    selected.push(row);
                }
            }
        }
        Ok(selected)
    }

    /// Positions are resolved once per query, not once per row.
    fn resolve<'e>(
        &self,
        expression: &'e Expression,
    ) -> Result<Vec<Vec<(usize, &'e str)>>, QueryError> {
        expression
            .groups()
            .iter()
            .map(|group| {
                group
                    .predicates()
                    .iter()
                    .map(|p| Ok((self.fact.dimension_position(&p.column)?, p.value.as_str())))
                    .collect()
            })
            .collect()
    }
}
