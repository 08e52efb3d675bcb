#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use fhir_codec::{FhirCodec, FhirVersion, Resource};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Routes codec logs to the test harness; set `RUST_LOG=fhir_codec=trace` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn data_dir(version: FhirVersion) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(format!("tests/data/{}", version.as_str().to_lowercase()));
    path
}

/// Every `.json` fixture of a release, sorted by file name.
pub fn fixtures(version: FhirVersion) -> Vec<PathBuf> {
    let dir = data_dir(version);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Could not read fixture directory {:?}: {}", dir, e))
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
}

pub fn read_fixture(version: FhirVersion, name: &str) -> String {
    let mut path = data_dir(version);
    path.push(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Could not read fixture {:?}: {}", path, e))
}

pub fn fixture_json(version: FhirVersion, name: &str) -> Value {
    serde_json::from_str(&read_fixture(version, name))
        .unwrap_or_else(|e| panic!("Fixture {} is not JSON: {}", name, e))
}

pub fn load(version: FhirVersion, name: &str) -> Resource {
    FhirCodec::new(version)
        .to_fhir(None, &read_fixture(version, name))
        .unwrap_or_else(|e| panic!("Failed to decode {}: {}", name, e))
}
