use crate::engine::core::fact::FactTable;

pub use super::factories::{ExpressionFactory, FactTableFactory, TableFactory};

pub struct Factory;

impl Factory {
    pub fn table() -> TableFactory {
        TableFactory::new()
    }

    pub fn fact_table() -> FactTableFactory {
        FactTableFactory::new()
    }

    pub fn expression(fact: &FactTable) -> ExpressionFactory<'_> {
        ExpressionFactory::new(fact)
    }
}
