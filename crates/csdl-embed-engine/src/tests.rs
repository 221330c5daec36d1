use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty gist directory under a temporary root
pub fn create_test_gist(root: &TempDir, id: &str) -> PathBuf {
    let dir = root.path().join(id);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Create a test file with content
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
