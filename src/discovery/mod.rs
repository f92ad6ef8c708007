//! File discovery and loading for siam projects.
//!
//! Finds system documents (`.ssf`) either from explicit paths or from the
//! sources listed in a `siam.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use siam::discovery::discover;
//!
//! let result = discover("./design")?;
//! for loaded in result.load_all()? {
//!     println!("{}: {} element(s)", loaded.stem(), loaded.system.elements.len());
//! }
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_system, read_source, LoadedSystem};
pub use manifest::Manifest;
pub use scanner::{is_system_file, scan_directory, scan_sources, ScanResult, SYSTEM_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "siam.yaml";

/// Result of discovering system documents.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no siam.yaml was found).
    pub manifest: Manifest,

    /// Whether a siam.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Load and parse every discovered system, in discovery order.
    pub fn load_all(&self) -> Result<Vec<LoadedSystem>> {
        let breakpoints = self.manifest.breakpoint_table();
        self.scan
            .systems
            .iter()
            .map(|path| load_system(path, breakpoints))
            .collect()
    }
}

/// Discover system documents in a project directory.
///
/// Uses the sources of `siam.yaml` when one exists in `root`, otherwise
/// scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);
    log::debug!("discovered {} system(s) under {}", scan.total(), root.display());

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover system documents from specific paths.
///
/// Directories are scanned; files are taken as given when they have the
/// `.ssf` extension. `manifest` supplies excludes and breakpoint widths.
pub fn discover_paths(paths: &[PathBuf], manifest: Manifest) -> Result<DiscoveryResult> {
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() && is_system_file(path) {
            scan.merge(ScanResult {
                systems: vec![path.clone()],
            });
        } else {
            log::warn!("skipping {}: not a .{} file or directory", path.display(), SYSTEM_EXTENSION);
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Breakpoint;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert!(result.scan.is_empty());
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("system.ssf"), "tokens\n\tcolor\n\t\tprimary blue").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert_eq!(result.scan.total(), 1);
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("siam.yaml"),
            "sources:\n  - systems/\noutput: build\nbreakpoints:\n  medium: 800\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("systems")).unwrap();
        fs::write(dir.path().join("systems/brand.ssf"), "tokens").unwrap();
        fs::write(dir.path().join("ignored.ssf"), "tokens").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert_eq!(result.manifest.output, PathBuf::from("build"));
        assert_eq!(result.scan.total(), 1);

        let loaded = result.load_all().unwrap();
        assert_eq!(loaded[0].stem(), "brand");
        assert_eq!(loaded[0].system.breakpoints.width(Breakpoint::Medium), 800);
    }

    #[test]
    fn test_discover_paths_files_and_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("more")).unwrap();
        let file = dir.path().join("one.ssf");
        fs::write(&file, "tokens").unwrap();
        fs::write(dir.path().join("more/two.ssf"), "tokens").unwrap();
        fs::write(dir.path().join("readme.md"), "# hi").unwrap();

        let paths = vec![
            file,
            dir.path().join("more"),
            dir.path().join("readme.md"),
        ];
        let result = discover_paths(&paths, Manifest::default()).unwrap();

        assert_eq!(result.scan.total(), 2);
    }
}
