//! Init command implementation.
//!
//! Writes a `siam.yaml` manifest and a starter system document.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::MANIFEST_FILENAME;
use crate::error::{Result, SiamError};
use crate::output::{display_path, Printer};
use crate::types::EXAMPLE_SYSTEM;

/// File name of the starter system document.
pub const STARTER_FILENAME: &str = "system.ssf";

const MANIFEST_TEMPLATE: &str = "\
sources:
  - \"./\"
output: dist
pretty: true
";

/// Initialize a siam project (siam.yaml and a starter system)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);
    let starter_path = args.path.join(STARTER_FILENAME);

    if !args.force {
        for path in [&manifest_path, &starter_path] {
            if path.exists() {
                return Err(SiamError::Build {
                    message: format!("{} already exists", display_path(path)),
                    help: Some("Use --force to overwrite".to_string()),
                });
            }
        }
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| SiamError::Io {
            path: args.path.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    write_file(&manifest_path, MANIFEST_TEMPLATE)?;
    printer.status("Created", &display_path(&manifest_path));

    write_file(&starter_path, EXAMPLE_SYSTEM)?;
    printer.status("Created", &display_path(&starter_path));

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| SiamError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{discover, Manifest};
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_project() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(manifest.pretty);
        assert_eq!(manifest.output, PathBuf::from("dist"));

        let starter = fs::read_to_string(dir.path().join(STARTER_FILENAME)).unwrap();
        assert_eq!(starter, EXAMPLE_SYSTEM);
    }

    #[test]
    fn test_init_project_is_discoverable() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::plain()).unwrap();

        let result = discover(dir.path()).unwrap();
        assert!(result.has_manifest);
        assert_eq!(result.scan.total(), 1);
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &Printer::plain());
        assert!(matches!(result, Err(SiamError::Build { .. })));
    }

    #[test]
    fn test_init_errors_if_starter_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STARTER_FILENAME), "tokens").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        assert!(run(args, &Printer::plain()).is_err());
        assert!(!dir.path().join(MANIFEST_FILENAME).exists());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: dist"));
    }
}
