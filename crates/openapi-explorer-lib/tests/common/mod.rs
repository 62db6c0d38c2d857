//! Common test utilities and fixture helpers.

use std::fs;
use std::path::PathBuf;

use openapi_explorer_lib::Catalog;
use tempfile::TempDir;

/// Path to the sample OpenAPI document shared by the workspace tests.
pub fn fixture_document_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_openapi.json")
}

/// Load the fixture document into a catalog.
#[allow(dead_code)]
pub fn fixture_catalog() -> Catalog {
    Catalog::from_path(&fixture_document_path()).expect("fixture document loads")
}

/// Temporary directory holding a single document file.
#[allow(dead_code)]
pub struct DocumentEnv {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl DocumentEnv {
    /// Write `contents` to `openapi.json` inside a fresh temp directory.
    pub fn with_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("openapi.json");
        fs::write(&path, contents).expect("write document");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    pub fn dir(&self) -> &std::path::Path {
        self._temp_dir.path()
    }
}
