//! Build command implementation.
//!
//! Resolves each system document and writes its output as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths, LoadedSystem, Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SiamError};
use crate::output::{display_path, plural, Printer};
use crate::resolve::{resolve_system, OutputSystem};

/// Resolve system documents into token and element JSON
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Files or directories to build (default: siam.yaml sources)
    pub paths: Vec<PathBuf>,

    /// Output directory (overrides siam.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print JSON to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Pretty-print JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths, local_manifest()?)?
    };

    if discovery.scan.is_empty() {
        return Err(SiamError::Build {
            message: "No .ssf files found".to_string(),
            help: Some("Pass a file or directory, or run `siam init`".to_string()),
        });
    }

    for name in discovery.manifest.ignored_breakpoints() {
        printer.warning("Ignoring", &format!("breakpoint '{}' in {}", name, MANIFEST_FILENAME));
    }

    let pretty = args.pretty || discovery.manifest.pretty;
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| discovery.root.join(&discovery.manifest.output));

    let systems = discovery.load_all()?;
    for loaded in &systems {
        printer.status("Resolving", &display_path(&loaded.path));
        let output = resolve_system(&loaded.system);

        if args.stdout {
            println!("{}", to_json(&output, pretty)?);
        } else {
            let path = write_output(loaded, &output, &output_dir, pretty)?;
            printer.info("Wrote", &display_path(&path));
        }
    }

    printer.status("Finished", &plural(systems.len(), "system", "systems"));

    Ok(())
}

/// Manifest from the working directory, if there is one.
fn local_manifest() -> Result<Manifest> {
    let path = Path::new(MANIFEST_FILENAME);
    if path.exists() {
        Manifest::load(path)
    } else {
        Ok(Manifest::default())
    }
}

/// Serialize resolved output.
pub fn to_json(output: &OutputSystem, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };
    json.map_err(|e| SiamError::Build {
        message: format!("Failed to serialize output: {}", e),
        help: None,
    })
}

/// Write `<stem>.json` into `output_dir`, creating it if needed.
pub fn write_output(
    loaded: &LoadedSystem,
    output: &OutputSystem,
    output_dir: &Path,
    pretty: bool,
) -> Result<PathBuf> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|e| SiamError::Io {
            path: output_dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let path = output_dir.join(format!("{}.json", loaded.stem()));
    fs::write(&path, to_json(output, pretty)?).map_err(|e| SiamError::Io {
        path: path.clone(),
        message: format!("Failed to write output: {}", e),
    })?;

    Ok(path)
}
