pub mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{DataConfig, LoggingConfig, OutputFormat, QueryConfig, Settings, load_settings};
