//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

/// The fixture project checked into `tests/fixtures/app`.
pub fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/app")
}

/// Copies the fixture project into `dest` so a test can modify it.
pub fn copy_fixture(dest: &Path) {
    let source = fixture();
    for entry in walkdir::WalkDir::new(&source) {
        let entry = entry.unwrap();
        let target = dest.join(entry.path().strip_prefix(&source).unwrap());
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).unwrap();
        } else {
            std::fs::copy(entry.path(), &target).unwrap();
        }
    }
}
