//! Loading system documents from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SiamError};
use crate::parser::parse_system_source;
use crate::types::{BreakpointTable, System};

/// A system document read from disk.
#[derive(Debug, Clone)]
pub struct LoadedSystem {
    pub path: PathBuf,
    pub system: System,
}

impl LoadedSystem {
    /// File stem used to name output, e.g. `brand` for `brand.ssf`.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "system".to_string())
    }
}

/// Read a source file.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SiamError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}

/// Read and parse one system document.
///
/// `breakpoints` is the starting table, usually from the manifest; the
/// document's own `breakpoints` section is applied on top.
pub fn load_system(path: &Path, breakpoints: BreakpointTable) -> Result<LoadedSystem> {
    let source = read_source(path)?;
    let tree = parse_system_source(&source);
    log::debug!("parsed {} ({} top-level section(s))", path.display(), tree.len());

    Ok(LoadedSystem {
        path: path.to_path_buf(),
        system: System::from_tree_with(&tree, breakpoints),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Breakpoint;
    use tempfile::tempdir;

    #[test]
    fn test_load_system() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brand.ssf");
        fs::write(&path, "breakpoints\n\tlarge 1000\ntokens\n\tcolor\n\t\tprimary blue\n").unwrap();

        let base = BreakpointTable::default().with_width(Breakpoint::Small, 500);
        let loaded = load_system(&path, base).unwrap();

        assert_eq!(loaded.stem(), "brand");
        assert_eq!(loaded.system.breakpoints.width(Breakpoint::Small), 500);
        assert_eq!(loaded.system.breakpoints.width(Breakpoint::Large), 1000);
        assert_eq!(loaded.system.token_categories().count(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_system(Path::new("/nonexistent/brand.ssf"), BreakpointTable::default());
        assert!(matches!(result, Err(SiamError::Io { .. })));
    }
}
