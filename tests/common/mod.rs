#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the dotplot binary.
#[macro_export]
macro_rules! dotplot {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("dotplot"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.dotplot.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".dotplot.toml", content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

/// Release years with a clear tallest stack of 4 (1999).
pub const YEARS_JSON: &str = "[1999, 2001, 1999, 1997, 1999, 2001, 1999]";

/// Same points with ratings as color keys.
pub const YEARS_WITH_RATINGS_JSON: &str = r#"{
    "x": [1999, 2001, 1999, 1997],
    "color_by": [7.1, 8.4, 6.0, 9.2]
}"#;
