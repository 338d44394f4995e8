//! Shared helpers for the integration tests.
#![allow(dead_code)]

use futures_util::StreamExt;
use llm_gateway::streaming::DeltaStream;
use llm_gateway::types::AdapterConfig;
use std::path::{Path, PathBuf};
use wiremock::MockServer;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Raw text of `tests/fixtures/<provider>/<name>`.
pub fn read_fixture(provider: &str, name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(provider).join(name)).expect("read fixture")
}

/// Config pointing at `base_path` on the mock server.
pub fn mock_config(server: &MockServer, base_path: &str) -> AdapterConfig {
    AdapterConfig::new("sk-test").with_endpoint(format!("{}{base_path}", server.uri()))
}

/// Drain a stream, failing the test on any error item.
pub async fn collect_deltas(mut stream: DeltaStream) -> Vec<String> {
    let mut out = Vec::new();
    while let Some(item) = stream.next().await {
        out.push(item.expect("delta"));
    }
    out
}
