pub mod matcher;
pub mod runner;
pub mod scenarios;

pub use runner::run_scenario;
pub use scenarios::load_scenarios_from_json;
