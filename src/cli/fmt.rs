//! Fmt command implementation.
//!
//! Rewrites a document in canonical form: no blank lines and single spaces
//! between words. Indentation, names and value text are left as written.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::read_source;
use crate::error::{Result, SiamError};
use crate::output::{display_path, Printer};
use crate::parser::format_lines;

/// Rewrite a document in canonical form
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Document to format
    pub file: PathBuf,

    /// Rewrite the file in place instead of printing to stdout
    #[arg(long, short)]
    pub write: bool,
}

pub fn run(args: FmtArgs, printer: &Printer) -> Result<()> {
    let source = read_source(&args.file)?;
    let formatted = format_lines(&source);

    if !args.write {
        print!("{}", formatted);
        return Ok(());
    }

    if formatted == source {
        printer.info("Unchanged", &display_path(&args.file));
        return Ok(());
    }

    fs::write(&args.file, &formatted).map_err(|e| SiamError::Io {
        path: args.file.clone(),
        message: format!("Failed to write file: {}", e),
    })?;
    printer.status("Formatted", &display_path(&args.file));

    Ok(())
}
