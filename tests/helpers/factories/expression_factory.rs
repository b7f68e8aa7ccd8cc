use rand::Rng;
use rand::seq::SliceRandom;

use crate::engine::core::fact::FactTable;
use crate::engine::core::filter::{AndGroup, Expression, Predicate};

/// Random DNF expressions over values that exist in the fact table's indexes.
pub struct ExpressionFactory<'a> {
    fact: &'a FactTable,
    max_groups: usize,
    max_predicates: usize,
}

impl<'a> ExpressionFactory<'a> {
    pub fn new(fact: &'a FactTable) -> Self {
        Self {
            fact,
            max_groups: 3,
            max_predicates: 3,
        }
    }

    pub fn with_max_groups(mut self, n: usize) -> Self {
        self.max_groups = n;
        self
    }

    pub fn with_max_predicates(mut self, n: usize) -> Self {
        self.max_predicates = n;
        self
    }

    /// May produce an empty expression or empty AND-groups.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Expression {
        let dimensions: Vec<(&str, Vec<&str>)> = self
            .fact
            .indexes()
            .map(|index| {
                let mut values: Vec<&str> = index.values().collect();
                values.sort_unstable();
                (index.column.as_str(), values)
            })
            .filter(|(_, values)| !values.is_empty())
            .collect();

        let group_count = rng.gen_range(0..=self.max_groups);
        let mut groups = Vec::with_capacity(group_count);
        for _ in 0..group_count {
            let predicate_count = rng.gen_range(0..=self.max_predicates);
            let mut predicates = Vec::with_capacity(predicate_count);
            for _ in 0..predicate_count {
                let Some((column, values)) = dimensions.choose(rng) else {
                    break;
                };
                let Some(value) = values.choose(rng) else {
                    continue;
                };
                predicates.push(Predicate::new(*column, *value));
            }
            groups.push(AndGroup(predicates));
        }
        Expression::new(groups)
    }
}
