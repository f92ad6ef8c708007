//! Core domain types for siam.
//!
//! This module contains the fundamental types the resolver works from:
//! - `Breakpoint` / `BreakpointTable` - the six responsive tiers and their widths
//! - `AliasIndex` - property name to token category lookup
//! - `System` - typed view over a parsed document

mod alias;
mod breakpoint;
mod case;
mod system;

pub use alias::{bare_property, AliasIndex, MODIFIER_JOIN};
pub use breakpoint::{Breakpoint, BreakpointTable};
pub use case::camel_to_hyphen;
pub use system::{System, ALIASES, BREAKPOINTS, ELEMENTS, EXAMPLE_SYSTEM, TOKENS};
