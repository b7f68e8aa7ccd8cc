pub mod expression_factory;
pub mod fact_table_factory;
pub mod table_factory;

pub use expression_factory::ExpressionFactory;
pub use fact_table_factory::FactTableFactory;
pub use table_factory::TableFactory;

#[cfg(test)]
mod expression_factory_test;
#[cfg(test)]
mod fact_table_factory_test;
#[cfg(test)]
mod table_factory_test;
