//! Golden datasets for namematch tests and benchmarks.
//!
//! Fixtures live under `crates/test-fixtures/` and are found by walking up
//! from the calling crate's manifest directory.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One end-to-end matching scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// `(id, name)` pairs.
    pub references: Vec<(String, String)>,
    pub query: String,
    /// `MATCH`, `NO_MATCH` or `REVIEW`.
    pub expected_decision: String,
    #[serde(default)]
    pub expected_matched_id: Option<String>,
    #[serde(default)]
    pub expected_reasons: Vec<String>,
    #[serde(default)]
    pub expected_warnings: Vec<String>,
    #[serde(default)]
    pub arbiter_calls: Option<usize>,
}

/// Root directory of the fixtures.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// The golden matching scenarios.
pub fn load_scenarios() -> Vec<Scenario> {
    load_fixture("golden/scenarios.json")
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn golden_files_parse() {
        for f in ["golden/scenarios.json", "golden/labeled_pairs.json", "golden/batch.json"] {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
            let _ = load_fixture_value(f);
        }
    }

    #[test]
    fn scenarios_are_well_formed() {
        let scenarios = load_scenarios();
        assert!(scenarios.len() >= 5);
        for s in &scenarios {
            assert!(!s.references.is_empty(), "{} has no references", s.name);
            assert!(
                ["MATCH", "NO_MATCH", "REVIEW"].contains(&s.expected_decision.as_str()),
                "{} has bad decision {}",
                s.name,
                s.expected_decision
            );
        }
    }
}
