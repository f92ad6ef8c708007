//! Parse command implementation.
//!
//! Prints the coerced tree of a document as JSON, keys in declaration order.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::read_source;
use crate::error::{Result, SiamError};
use crate::parser::{parse_system_source, Object};

/// Print the parsed tree of a document as JSON
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Document to parse
    pub file: PathBuf,

    /// Pretty-print JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    let tree = parse_system_source(&source);
    println!("{}", tree_json(&tree, args.pretty)?);
    Ok(())
}

/// Serialize a parsed tree.
pub fn tree_json(tree: &Object, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };
    json.map_err(|e| SiamError::Parse {
        message: format!("Failed to serialize tree: {}", e),
        help: None,
    })
}
