pub mod ops;
pub mod plan;
