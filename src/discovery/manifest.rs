//! Project manifest (siam.yaml) parsing.
//!
//! The manifest defines where system documents live, where output goes, and
//! project-wide breakpoint widths.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiamError};
use crate::types::{Breakpoint, BreakpointTable};

/// Project manifest loaded from siam.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for `.ssf` files.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// Output directory for resolved JSON.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Breakpoint width overrides (name -> pixels). Documents can override
    /// these again in their own `breakpoints` section.
    pub breakpoints: BTreeMap<String, u32>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            excludes: vec![],
            pretty: false,
            breakpoints: BTreeMap::new(),
        }
    }
}

impl Manifest {
    /// Load manifest from a siam.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SiamError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as null rather than an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SiamError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check siam.yaml syntax".to_string()),
        })
    }

    /// Breakpoint table with the manifest's overrides applied.
    ///
    /// Entries listed by [`Manifest::ignored_breakpoints`] have no effect.
    pub fn breakpoint_table(&self) -> BreakpointTable {
        let mut table = BreakpointTable::default();
        for (name, width) in &self.breakpoints {
            match Breakpoint::from_name(name) {
                Some(breakpoint) => table.set_width(breakpoint, *width),
                None => log::debug!("siam.yaml: unknown breakpoint '{}' ignored", name),
            }
        }
        table
    }

    /// Breakpoint entries that cannot be applied: names outside the six
    /// tiers, and `base`, whose width is always 0.
    pub fn ignored_breakpoints(&self) -> Vec<&str> {
        self.breakpoints
            .iter()
            .filter(|(name, width)| match Breakpoint::from_name(name) {
                Some(Breakpoint::Base) => **width != 0,
                Some(_) => false,
                None => true,
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.ends_with(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}
