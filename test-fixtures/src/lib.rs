//! Test fixture loader for Veracity golden scenarios.
//!
//! Provides JSON fixture loading plus shared sample texts used by
//! integration tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures").join("fixtures")
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

/// Load a fixture file as a raw JSON value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A block of prose with three well-sourced empirical claims; pairs with
/// [`sample_sources`].
pub fn sample_content() -> &'static str {
    "Specifically within the survey scope, data shows adoption increased steadily. \
     Research suggests deployment costs declined across cohorts. \
     We cannot determine vendor-specific effects yet."
}

/// Sources corroborating [`sample_content`].
pub fn sample_sources() -> Vec<String> {
    vec![
        "Survey data shows adoption increased across all measured cohorts.".to_string(),
        "Independent survey research shows adoption increased while deployment costs declined."
            .to_string(),
        "Quarterly survey report: data shows adoption increased; deployment costs declined again."
            .to_string(),
    ]
}
