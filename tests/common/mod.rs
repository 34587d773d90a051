//! Shared test fixtures and utilities for integration tests.
//!
//! Each test gets its own library directory in a fresh temporary directory,
//! populated from the JSON files under `tests/fixtures/`:
//!
//! - `crystal/1.9.2.json` and `crystal/1.10.1.json` (standard library)
//! - `kemal/1.4.0.json` (a shard whose types nest under one namespace)
//!
//! # Available Fixtures
//!
//! - `library_dir`: the populated library directory; `.context()` gives a
//!   `DocContext` reading from it

use docr::config::Config;
use docr::context::DocContext;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Path of a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    project_root().join("tests").join("fixtures").join(name)
}

/// A temporary workspace directory for test isolation.
///
/// Provides basic filesystem operations within a temp directory that is
/// automatically cleaned up when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a directory (and all parent directories) within this workspace.
    pub fn create_dir(&self, path: &str) {
        let full_path = self.root.join(path);
        std::fs::create_dir_all(&full_path)
            .unwrap_or_else(|e| panic!("Failed to create directory '{}': {}", path, e));
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// Parent directories are created automatically if they don't exist.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Installs a fixture as documentation for `library` at `version`.
    pub fn install(&self, fixture: &str, library: &str, version: &str) {
        let content = std::fs::read_to_string(fixture_path(fixture))
            .unwrap_or_else(|e| panic!("Failed to read fixture '{}': {}", fixture, e));
        self.create_file(&format!("{library}/{version}.json"), &content);
    }

    /// A context whose library directory is this workspace.
    pub fn context(&self) -> DocContext {
        DocContext::new(Config {
            library_dir: self.root.clone(),
            default_library: "crystal".to_string(),
        })
    }
}

/// A library directory with the standard library and one shard installed.
#[fixture]
pub fn library_dir() -> TempWorkspace {
    let workspace = TempWorkspace::new();
    workspace.install("crystal.json", "crystal", "1.9.2");
    workspace.install("crystal.json", "crystal", "1.10.1");
    workspace.install("kemal.json", "kemal", "1.4.0");
    workspace
}

/// Split a query line into tokens the way a shell would for simple input.
#[allow(dead_code)]
pub fn tokens(query: &str) -> Vec<String> {
    query.split_whitespace().map(String::from).collect()
}
