//! Token batching.
//!
//! Flattens the `tokens` section into one grouped record per token value and
//! re-partitions the same values by breakpoint width.

use serde::Serialize;

use crate::parser::{Node, Object, Value};
use crate::types::{camel_to_hyphen, BreakpointTable, System};

use super::batch::{batch_mut, sort_batches, Batch};

/// One token value at one breakpoint.
///
/// A token with per-breakpoint values produces one record per breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedToken {
    pub category: String,
    pub name: String,
    pub hyphen_category: String,
    pub hyphen_name: String,
    pub breakpoint_width: u32,
    pub value: Value,
}

/// A token value inside a breakpoint batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchToken {
    pub category: String,
    pub name: String,
    pub hyphen_category: String,
    pub hyphen_name: String,
    pub value: Value,
}

/// All token values active at one breakpoint width.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBatch {
    pub breakpoint_width: u32,
    pub entries: Vec<BatchToken>,
}

impl Batch for TokenBatch {
    fn empty(width: u32) -> Self {
        Self {
            breakpoint_width: width,
            entries: Vec::new(),
        }
    }

    fn width(&self) -> u32 {
        self.breakpoint_width
    }
}

/// A reference from an element property to the token it names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRef {
    pub category: String,
    pub name: String,
    pub hyphen_category: String,
    pub hyphen_name: String,
    /// The token's value at the matched breakpoint
    pub value: Value,
}

impl From<&GroupedToken> for TokenRef {
    fn from(token: &GroupedToken) -> Self {
        Self {
            category: token.category.clone(),
            name: token.name.clone(),
            hyphen_category: token.hyphen_category.clone(),
            hyphen_name: token.hyphen_name.clone(),
            value: token.value.clone(),
        }
    }
}

/// Grouped token records in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupedTokens {
    tokens: Vec<GroupedToken>,
}

impl GroupedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: GroupedToken) {
        self.tokens.push(token);
    }

    /// Find a token for a reference at `width`.
    ///
    /// Tries the exact breakpoint first, then base. When several records
    /// match, the latest one wins.
    pub fn find(&self, category: &str, name: &str, width: u32) -> Option<&GroupedToken> {
        self.find_exact(category, name, width).or_else(|| {
            if width == 0 {
                None
            } else {
                self.find_exact(category, name, 0)
            }
        })
    }

    fn find_exact(&self, category: &str, name: &str, width: u32) -> Option<&GroupedToken> {
        self.tokens.iter().rev().find(|t| {
            t.breakpoint_width == width && t.category == category && t.name == name
        })
    }

    /// Resolve a property value against the tokens of `category`.
    ///
    /// Only text values can name a token.
    pub fn match_value(&self, category: &str, value: &Value, width: u32) -> Option<TokenRef> {
        let name = value.as_str()?;
        let found = self.find(category, name, width).map(TokenRef::from);
        if found.is_none() {
            log::trace!("no token '{}' in category '{}' at {}px", name, category, width);
        }
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupedToken> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokens in both grouped and batched form.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet {
    pub grouped: GroupedTokens,
    /// Sorted by ascending width; the base batch is always first.
    pub batched: Vec<TokenBatch>,
}

/// Walk every token declaration in the system.
pub fn batch_tokens(system: &System) -> TokenSet {
    let mut batcher = TokenBatcher::new(&system.breakpoints);
    for (category, entries) in system.token_categories() {
        batcher.add_category(category, entries);
    }
    batcher.finish()
}

struct TokenBatcher<'a> {
    breakpoints: &'a BreakpointTable,
    grouped: GroupedTokens,
    batched: Vec<TokenBatch>,
}

impl<'a> TokenBatcher<'a> {
    fn new(breakpoints: &'a BreakpointTable) -> Self {
        Self {
            breakpoints,
            grouped: GroupedTokens::new(),
            batched: vec![TokenBatch::empty(0)],
        }
    }

    fn add_category(&mut self, category: &str, entries: &Object) {
        for (name, node) in entries.iter() {
            match node {
                Node::Scalar(value) => self.add_value(category, name, 0, value),
                Node::Object(values) if values.is_empty() => {
                    log::debug!("token '{}.{}' has no value, skipping", category, name);
                }
                Node::Object(values) => self.add_breakpoint_values(category, name, values),
            }
        }
    }

    /// Add a per-breakpoint token. Keys are taken one at a time, so a
    /// partially valid set keeps its recognised breakpoints.
    fn add_breakpoint_values(&mut self, category: &str, name: &str, values: &Object) {
        for (breakpoint, node) in values.iter() {
            let Some(width) = self.breakpoints.width_of(breakpoint) else {
                log::debug!(
                    "token '{}.{}': '{}' is not a breakpoint, skipping",
                    category,
                    name,
                    breakpoint
                );
                continue;
            };
            match node {
                Node::Scalar(value) => self.add_value(category, name, width, value),
                Node::Object(_) => log::debug!(
                    "token '{}.{}': nested value under '{}' ignored",
                    category,
                    name,
                    breakpoint
                ),
            }
        }
    }

    fn add_value(&mut self, category: &str, name: &str, width: u32, value: &Value) {
        let hyphen_category = camel_to_hyphen(category);
        let hyphen_name = camel_to_hyphen(name);

        batch_mut(&mut self.batched, width).entries.push(BatchToken {
            category: category.to_string(),
            name: name.to_string(),
            hyphen_category: hyphen_category.clone(),
            hyphen_name: hyphen_name.clone(),
            value: value.clone(),
        });

        self.grouped.push(GroupedToken {
            category: category.to_string(),
            name: name.to_string(),
            hyphen_category,
            hyphen_name,
            breakpoint_width: width,
            value: value.clone(),
        });
    }

    fn finish(mut self) -> TokenSet {
        sort_batches(&mut self.batched);
        TokenSet {
            grouped: self.grouped,
            batched: self.batched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(source: &str) -> TokenSet {
        batch_tokens(&System::parse(source))
    }

    fn summary(set: &TokenSet) -> Vec<(u32, Vec<String>)> {
        set.batched
            .iter()
            .map(|batch| {
                let names = batch
                    .entries
                    .iter()
                    .map(|e| format!("{}.{}={}", e.category, e.name, e.value))
                    .collect();
                (batch.breakpoint_width, names)
            })
            .collect()
    }

    #[test]
    fn test_base_batch_always_present() {
        let set = tokens("");
        assert_eq!(set.batched.len(), 1);
        assert_eq!(set.batched[0].breakpoint_width, 0);
        assert!(set.batched[0].entries.is_empty());
        assert!(set.grouped.is_empty());
    }

    #[test]
    fn test_scalar_tokens_go_to_base() {
        let set = tokens("tokens\n\tcolor\n\t\tprimary blue\n\t\tdanger red\n\tsize\n\t\tsm 3");

        assert_eq!(
            summary(&set),
            vec![(
                0,
                vec![
                    "color.primary=blue".to_string(),
                    "color.danger=red".to_string(),
                    "size.sm=3".to_string()
                ]
            )]
        );
        assert_eq!(set.grouped.len(), 3);
        assert!(set.grouped.iter().all(|t| t.breakpoint_width == 0));
    }

    #[test]
    fn test_breakpoint_tokens_one_record_per_breakpoint() {
        let set = tokens("tokens\n\tspacing\n\t\tgutter\n\t\t\tlarge 24\n\t\t\tbase 8\n\t\t\tmedium 16");

        let widths: Vec<u32> = set.grouped.iter().map(|t| t.breakpoint_width).collect();
        assert_eq!(widths, vec![992, 0, 768]);

        assert_eq!(
            summary(&set),
            vec![
                (0, vec!["spacing.gutter=8".to_string()]),
                (768, vec!["spacing.gutter=16".to_string()]),
                (992, vec!["spacing.gutter=24".to_string()]),
            ]
        );
    }

    #[test]
    fn test_unknown_breakpoint_keys_are_skipped() {
        let set = tokens("tokens\n\tspacing\n\t\tgutter\n\t\t\tbase 8\n\t\t\thuge 40");

        assert_eq!(set.grouped.len(), 1);
        assert_eq!(summary(&set), vec![(0, vec!["spacing.gutter=8".to_string()])]);
    }

    #[test]
    fn test_custom_breakpoint_width() {
        let set = tokens("breakpoints\n\tmedium 800\ntokens\n\tspacing\n\t\tgutter\n\t\t\tmedium 16");
        assert_eq!(set.batched[1].breakpoint_width, 800);
    }

    #[test]
    fn test_base_override_keeps_one_base_batch() {
        let set = tokens(
            "breakpoints\n\tbase 100\ntokens\n\tspacing\n\t\tgutter\n\t\t\tbase 8\n\t\t\tmedium 16\n\t\tsm 4",
        );

        let widths: Vec<u32> = set.batched.iter().map(|b| b.breakpoint_width).collect();
        assert_eq!(widths, vec![0, 768]);
        assert_eq!(set.batched[0].entries.len(), 2);

        let gutter = set.grouped.find("spacing", "gutter", 992).unwrap();
        assert_eq!(gutter.value, Value::Number(8.0));
    }

    #[test]
    fn test_hyphen_names() {
        let set = tokens("tokens\n\tborderRadius\n\t\tcontrolSmall 3");
        let token = set.grouped.iter().next().unwrap();
        assert_eq!(token.hyphen_category, "border-radius");
        assert_eq!(token.hyphen_name, "control-small");
    }

    #[test]
    fn test_find_prefers_exact_breakpoint_then_base() {
        let set = tokens("tokens\n\tspacing\n\t\tgutter\n\t\t\tbase 8\n\t\t\tmedium 16");

        let medium = set.grouped.find("spacing", "gutter", 768).unwrap();
        assert_eq!(medium.value, Value::Number(16.0));

        let large = set.grouped.find("spacing", "gutter", 992).unwrap();
        assert_eq!(large.value, Value::Number(8.0));

        assert!(set.grouped.find("spacing", "missing", 0).is_none());
        assert!(set.grouped.find("color", "gutter", 0).is_none());
    }

    #[test]
    fn test_match_value_only_for_text() {
        let set = tokens("tokens\n\tsize\n\t\t3 three");

        assert!(set.grouped.match_value("size", &Value::Number(3.0), 0).is_none());
        let matched = set.grouped.match_value("size", &Value::from("3"), 0).unwrap();
        assert_eq!(matched.name, "3");
        assert_eq!(matched.value, Value::from("three"));
    }
}
