pub mod bitmap_evaluator;
pub mod condition_formatter;
pub mod expression;
pub mod scan_evaluator;

pub use bitmap_evaluator::BitmapEvaluator;
pub use condition_formatter::{DimensionMatch, format_conditions};
pub use expression::{AndGroup, Expression, Predicate};
pub use scan_evaluator::ScanEvaluator;
