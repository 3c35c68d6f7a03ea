use std::path::PathBuf;

/// Returns the path to a configuration fixture.
pub fn config_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/configs")
        .join(name)
}

/// Returns the directory holding document fixtures.
pub fn documents_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/documents")
}

/// Returns the path to a document fixture.
pub fn document_fixture_path(name: &str) -> PathBuf {
    documents_dir().join(name)
}

/// Reads a document fixture into memory.
#[allow(clippy::expect_used)]
pub fn read_document_fixture(name: &str) -> String {
    std::fs::read_to_string(document_fixture_path(name)).expect("Failed to read document fixture")
}

/// Routes `tracing` output through the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
