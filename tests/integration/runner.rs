use std::path::Path;

use bitfact::command::parser::{parse_aggregates, parse_filter};
use bitfact::engine::query::Catalog;
use bitfact::loader::load_catalog;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::integration::scenarios::TestScenario;

pub fn fixture_catalog() -> Catalog {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/integration/fixtures");
    load_catalog(&dir.join("meta_schema.txt"), &dir.join("data.txt"))
        .expect("Failed to load fixture catalog")
}

fn as_report<T: Serialize, E: std::fmt::Display>(result: &Result<T, E>) -> Value {
    match result {
        Ok(outcome) => serde_json::to_value(outcome).expect("Outcome is not serializable"),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

/// Evaluates the scenario on both paths and checks every matcher against the
/// combined JSON report.
pub fn run_scenario(catalog: &Catalog, scenario: &TestScenario) {
    info!("▶ Running scenario: {}", scenario.name);

    let expression = parse_filter(&scenario.filter)
        .unwrap_or_else(|e| panic!("[{}] bad filter: {}", scenario.name, e));
    let requests = parse_aggregates(scenario.aggregates.as_slice())
        .unwrap_or_else(|e| panic!("[{}] bad aggregates: {}", scenario.name, e));

    let scan = catalog.fact.evaluate_without_index(&expression, &requests);
    let bitmap = catalog.evaluate_with_index(&expression, &requests);

    if let (Ok(scan), Ok(bitmap)) = (&scan, &bitmap) {
        assert_eq!(
            scan.results, bitmap.results,
            "[{}] scan and bitmap paths disagree",
            scenario.name
        );
    }

    let report = json!({ "scan": as_report(&scan), "bitmap": as_report(&bitmap) }).to_string();
    debug!("[{}] report: {}", scenario.name, report);

    for matcher in &scenario.matchers {
        assert!(
            matcher.matches(&report),
            "[{}] matcher {:?} failed on {}",
            scenario.name,
            matcher,
            report
        );
    }
}
