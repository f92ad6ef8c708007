//! siam - Design system compiler
//!
//! A library for turning tab-indented design-system documents into grouped
//! and breakpoint-batched design tokens and element styles.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod resolve;
pub mod types;

pub use discovery::{discover, discover_paths, load_system, DiscoveryResult, LoadedSystem, Manifest, ScanResult};
pub use error::{Result, SiamError};
pub use parser::{coerce_value, emit_document, format_lines, parse_system_source, parse_tabbed_content, Node, Object, Value};
pub use resolve::{
    batch_tokens, resolve_system, ElementResolver, GroupedTokens, OutputSystem, ResolvedElement, TokenSet,
};
pub use types::{camel_to_hyphen, AliasIndex, Breakpoint, BreakpointTable, System};
