//! Resolution of a parsed system into renderer-ready output.
//!
//! Tokens are batched first; elements are then resolved against the grouped
//! tokens. Every call builds fresh output from its inputs.
//!
//! # Example
//!
//! ```ignore
//! use siam::{resolve_system, System};
//!
//! let system = System::parse(&source);
//! let output = resolve_system(&system);
//! for batch in &output.batched_tokens {
//!     println!("{}px: {} token(s)", batch.breakpoint_width, batch.entries.len());
//! }
//! ```

mod batch;
mod elements;
mod tokens;

use serde::Serialize;

use crate::types::System;

pub use batch::Batch;
pub use elements::{
    classify, BatchedGroup, BatchedProperty, BreakpointValue, Classified, ElementResolver,
    GroupedProperty, PropertyBatch, PropertyGroup, ResolvedElement, STATE_SIGIL,
};
pub use tokens::{
    batch_tokens, BatchToken, GroupedToken, GroupedTokens, TokenBatch, TokenRef, TokenSet,
};

/// Everything a renderer needs from a system.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSystem {
    pub grouped_tokens: GroupedTokens,
    /// Sorted by ascending width; the base batch is always first.
    pub batched_tokens: Vec<TokenBatch>,
    /// In declaration order.
    pub elements: Vec<ResolvedElement>,
}

impl OutputSystem {
    pub fn element(&self, name: &str) -> Option<&ResolvedElement> {
        self.elements.iter().find(|e| e.name == name)
    }
}

/// Batch tokens and resolve every element of a system.
pub fn resolve_system(system: &System) -> OutputSystem {
    let tokens = batch_tokens(system);
    log::debug!(
        "batched {} token value(s) into {} batch(es)",
        tokens.grouped.len(),
        tokens.batched.len()
    );

    let resolver = ElementResolver::new(&system.breakpoints, &system.aliases, &tokens.grouped);
    let empty = crate::parser::Object::new();
    let elements = system
        .elements
        .iter()
        .map(|(name, node)| {
            let declaration = node.as_object().unwrap_or_else(|| {
                log::debug!("element '{}' has a scalar declaration, treating as empty", name);
                &empty
            });
            resolver.resolve(name, declaration)
        })
        .collect();

    OutputSystem {
        grouped_tokens: tokens.grouped,
        batched_tokens: tokens.batched,
        elements,
    }
}
