//! Shared testing utilities for cloudbuild-gen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated repository for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Repository directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the repository.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cloudbuild-gen").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Create `k8s/<name>/Makefile` for each solution.
    pub fn add_solutions(&self, names: &[&str]) {
        for name in names {
            self.write_file(&format!("k8s/{}/Makefile", name), "app/build:\n");
        }
    }

    /// Write a file relative to the repository root, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// Read a file relative to the repository root.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Path of the generated manifest for `solution` under the default layout.
    pub fn manifest(&self, solution: &str) -> PathBuf {
        self.work_dir.join("cloudbuild").join(format!("cloudbuild-k8s-{}.yaml", solution))
    }
}

/// Expected default-template output for `wordpress` with no extra configs.
#[allow(dead_code)]
pub const WORDPRESS_MANIFEST: &str = include_str!("../fixtures/cloudbuild-k8s-wordpress.yaml");

/// Expected default-template output for `wordpress` with the public-ingress variant.
#[allow(dead_code)]
pub const WORDPRESS_EXTRA_MANIFEST: &str =
    include_str!("../fixtures/cloudbuild-k8s-wordpress-extra.yaml");
