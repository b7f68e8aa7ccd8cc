use regex::Regex;
use serde::Deserialize;
use tracing::{debug, error};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    Include,
    NotInclude,
    IncludeAll,
    IncludeNone,
    Regex,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MatcherValue {
    Single(String),
    Multiple(Vec<String>),
}

/// Expectation on the JSON report produced for a scenario.
#[derive(Debug, Deserialize)]
pub struct Matcher {
    pub kind: MatcherKind,
    pub value: MatcherValue,
}

impl Matcher {
    pub fn matches(&self, report: &str) -> bool {
        let result = match (&self.kind, &self.value) {
            (MatcherKind::Include, MatcherValue::Single(s)) => report.contains(s.as_str()),
            (MatcherKind::NotInclude, MatcherValue::Single(s)) => !report.contains(s.as_str()),
            (MatcherKind::IncludeAll, MatcherValue::Multiple(frags)) => {
                frags.iter().all(|f| report.contains(f.as_str()))
            }
            (MatcherKind::IncludeNone, MatcherValue::Multiple(frags)) => {
                frags.iter().all(|f| !report.contains(f.as_str()))
            }
            (MatcherKind::Regex, MatcherValue::Single(pattern)) => match Regex::new(pattern) {
                Ok(re) => re.is_match(report),
                Err(e) => {
                    error!("Invalid regex '{}': {}", pattern, e);
                    false
                }
            },
            _ => {
                error!("Invalid matcher kind/value combination: {:?}", self);
                false
            }
        };
        debug!(kind = ?self.kind, result, "Matcher evaluated");
        result
    }
}
