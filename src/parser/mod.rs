//! Parser for tab-indented system documents.
//!
//! # Document Structure
//!
//! Every line is a `name value...` pair. One leading tab per level nests a
//! line under the last line one level up:
//!
//! ```text
//! tokens
//! 	color
//! 		primary blue
//! elements
//! 	button
//! 		backgroundColor primary
//! ```
//!
//! Values are coerced to numbers, booleans, comma lists or strings. A line
//! with no value becomes an empty object that later lines can nest under.
//!
//! # Usage
//!
//! ```ignore
//! use siam::parser::parse_system_source;
//!
//! let source = std::fs::read_to_string("system.ssf")?;
//! let tree = parse_system_source(&source);
//! ```

mod emit;
mod indent;
mod tree;
mod value;

pub use emit::{emit_document, format_lines};
pub use indent::{count_tabs, parse_tabbed_content, parse_tabbed_content_with, split_line, LineNode};
pub use tree::{Node, Object};
pub use value::{coerce_value, Value};

/// Parse a system document into its tree.
pub fn parse_system_source(source: &str) -> Object {
    parse_tabbed_content(source)
}
