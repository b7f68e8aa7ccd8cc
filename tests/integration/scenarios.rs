use crate::integration::matcher::Matcher;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct TestScenario {
    pub name: String,
    /// Filter in the `D1 = A AND D2 = X OR ...` form
    pub filter: String,
    /// Aggregates as `func:column`
    pub aggregates: Vec<String>,
    pub matchers: Vec<Matcher>,
}

pub fn load_scenarios_from_json(path: &str) -> Vec<TestScenario> {
    let content = fs::read_to_string(path).expect("Failed to read scenario file");
    serde_json::from_str(&content).expect("Invalid JSON format")
}
