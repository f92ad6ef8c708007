//! File system scanner for discovering system documents.
//!
//! Recursively scans directories to find `.ssf` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File extension of system documents.
pub const SYSTEM_EXTENSION: &str = "ssf";

/// Result of scanning for system documents.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered system files, sorted within each scanned directory.
    pub systems: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Merge another scan result into this one, skipping duplicates.
    pub fn merge(&mut self, other: ScanResult) {
        for path in other.systems {
            if !self.systems.contains(&path) {
                self.systems.push(path);
            }
        }
    }
}

/// Scan a directory for system documents.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        log::debug!("source {} does not exist", root.display());
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if is_system_file(path) {
            result.systems.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Whether a path names a system document.
pub fn is_system_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SYSTEM_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_system_file() {
        assert!(is_system_file(Path::new("system.ssf")));
        assert!(is_system_file(Path::new("/abs/path/brand.ssf")));
        assert!(!is_system_file(Path::new("system.ssf.bak")));
        assert!(!is_system_file(Path::new("readme.md")));
        assert!(!is_system_file(Path::new("ssf")));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(dir.path(), &Manifest::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("brands/dark")).unwrap();

        fs::write(dir.path().join("b.ssf"), "tokens").unwrap();
        fs::write(dir.path().join("a.ssf"), "tokens").unwrap();
        fs::write(dir.path().join("brands/dark/night.ssf"), "tokens").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignore").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());
        let names: Vec<String> = result
            .systems
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(result.total(), 3);
        assert_eq!(names[0], "a.ssf");
        assert_eq!(names[1], "b.ssf");
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("main.ssf"), "tokens").unwrap();
        fs::write(dir.path().join("drafts/wip.ssf"), "tokens").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };
        let result = scan_directory(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
        assert!(result.systems[0].ends_with("main.ssf"));
    }

    #[test]
    fn test_merge_skips_duplicates() {
        let mut a = ScanResult::new();
        a.systems.push(PathBuf::from("a.ssf"));

        let mut b = ScanResult::new();
        b.systems.push(PathBuf::from("a.ssf"));
        b.systems.push(PathBuf::from("b.ssf"));

        a.merge(b);
        assert_eq!(a.total(), 2);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Manifest::default());
        assert!(result.is_empty());
    }
}
