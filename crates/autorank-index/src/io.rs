//! Scoped file helpers for snapshot export

use std::path::{Path, PathBuf};

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path(path);
    if let Err(err) = std::fs::write(&temp_path, data) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(err);
    }
    std::fs::rename(temp_path, path)
}

/// Sibling of `path` with `.tmp` appended to the whole file name
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("index.json");

        atomic_write(&target, b"{}").unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"{}");
        assert!(!dir.path().join("nested").join("index.json.tmp").exists());
    }

    #[test]
    fn test_atomic_write_leaves_extension_sibling_alone() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("index");
        let sibling = dir.path().join("index.tmp");
        std::fs::write(&sibling, b"unrelated").unwrap();

        atomic_write(&target, b"{}").unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"{}");
        assert_eq!(std::fs::read(&sibling).unwrap(), b"unrelated");
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("index.json");

        atomic_write(&target, b"first").unwrap();
        atomic_write(&target, b"second").unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"second");
    }
}
