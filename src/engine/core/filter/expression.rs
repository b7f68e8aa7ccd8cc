use std::fmt;

use serde::{Deserialize, Serialize};

/// Equality test of one dimension column against a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub column: String,
    pub value: String,
}

impl Predicate {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Conjunction of predicates. An empty group matches every row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AndGroup(pub Vec<Predicate>);

impl AndGroup {
    pub fn predicates(&self) -> &[Predicate] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A query filter in disjunctive normal form: OR over AND-groups.
///
/// An empty expression matches no row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression(pub Vec<AndGroup>);

impl Expression {
    pub fn new(groups: Vec<AndGroup>) -> Self {
        Self(groups)
    }

    /// Builds an expression from `(column, value)` pairs, one slice per AND-group.
    pub fn from_pairs(groups: &[&[(&str, &str)]]) -> Self {
        Self(
            groups
                .iter()
                .map(|group| {
                    AndGroup(
                        group
                            .iter()
                            .map(|(column, value)| Predicate::new(*column, *value))
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    pub fn groups(&self) -> &[AndGroup] {
        &self.0
    }

    pub fn predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.0.iter().flat_map(|g| g.0.iter())
    }

    pub fn predicate_count(&self) -> usize {
        self.0.iter().map(|g| g.0.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (gi, group) in self.0.iter().enumerate() {
            if gi > 0 {
                f.write_str(" OR ")?;
            }
            if group.is_empty() {
                f.write_str("*")?;
                continue;
            }
            for (pi, p) in group.0.iter().enumerate() {
                if pi > 0 {
                    f.write_str(" AND ")?;
                }
                write!(f, "{}={}", p.column, p.value)?;
            }
        }
        Ok(())
    }
}
