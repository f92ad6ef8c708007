//! Element resolution.
//!
//! An element declaration nests four kinds of key. Each key is classified
//! once and handled by kind:
//!
//! - **leaf**: `color lightText`, a property with a single value
//! - **breakpoint set**: `padding` whose children are all breakpoint names
//! - **state**: `:hover`, a fragment scoped to a pseudo-state
//! - **modifier**: any other object, a fragment scoped to a variant
//!
//! Property values are matched against tokens through the alias index.
//! Output is grouped per selector (modifier path + state) and batched per
//! breakpoint width.

use serde::Serialize;

use crate::parser::{Node, Object, Value};
use crate::types::{camel_to_hyphen, AliasIndex, BreakpointTable, MODIFIER_JOIN};

use super::batch::{batch_mut, sort_batches, Batch};
use super::tokens::{GroupedTokens, TokenRef};

/// Prefix that marks a key as a pseudo-state.
pub const STATE_SIGIL: char = ':';

/// The kind of an element declaration key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified<'a> {
    Leaf(&'a Value),
    BreakpointSet(&'a Object),
    State(&'a Object),
    Modifier(&'a Object),
}

/// Decide what a declaration key is.
///
/// Breakpoint sets are recognised by membership: every key must be a
/// breakpoint name. An object that fails the test falls through to state or
/// modifier.
pub fn classify<'a>(key: &str, node: &'a Node, breakpoints: &BreakpointTable) -> Classified<'a> {
    match node {
        Node::Scalar(value) => Classified::Leaf(value),
        Node::Object(obj) if breakpoints.is_breakpoint_set(obj) => Classified::BreakpointSet(obj),
        Node::Object(obj) => {
            if obj.keys().any(|k| breakpoints.width_of(k).is_some()) {
                log::debug!(
                    "'{}' names breakpoints but is not a breakpoint set, reading it as a fragment",
                    key
                );
            }
            if key.starts_with(STATE_SIGIL) {
                Classified::State(obj)
            } else {
                Classified::Modifier(obj)
            }
        }
    }
}

/// A property value at one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointValue {
    pub breakpoint_width: u32,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_token: Option<TokenRef>,
}

/// A property with all of its per-breakpoint values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedProperty {
    pub name: String,
    pub hyphen_name: String,
    pub per_breakpoint_values: Vec<BreakpointValue>,
}

/// Properties sharing one selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyGroup {
    /// Modifier keys joined with `=`; empty for the element itself
    pub modifier_path: String,
    /// Concatenated state keys, e.g. `:hover`; empty when stateless
    pub state: String,
    pub properties: Vec<GroupedProperty>,
}

/// A property value inside a breakpoint batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchedProperty {
    pub name: String,
    pub hyphen_name: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_token: Option<TokenRef>,
}

/// Properties for one selector at one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchedGroup {
    pub modifier_path: String,
    pub state: String,
    pub properties: Vec<BatchedProperty>,
}

/// All selector groups active at one breakpoint width.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBatch {
    pub breakpoint_width: u32,
    pub groups: Vec<BatchedGroup>,
}

impl Batch for PropertyBatch {
    fn empty(width: u32) -> Self {
        Self {
            breakpoint_width: width,
            groups: Vec::new(),
        }
    }

    fn width(&self) -> u32 {
        self.breakpoint_width
    }
}

impl PropertyBatch {
    /// Find the group for a selector, appending it on first sight.
    fn group_mut(&mut self, modifier: &str, state: &str) -> &mut BatchedGroup {
        let index = match self
            .groups
            .iter()
            .position(|g| g.modifier_path == modifier && g.state == state)
        {
            Some(index) => index,
            None => {
                self.groups.push(BatchedGroup {
                    modifier_path: modifier.to_string(),
                    state: state.to_string(),
                    properties: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }
}

/// A fully resolved element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedElement {
    pub name: String,
    pub hyphen_name: String,
    /// Selector-oriented, in order of first property
    pub grouped_properties: Vec<PropertyGroup>,
    /// Breakpoint-oriented, sorted by ascending width; base always first
    pub batched_properties: Vec<PropertyBatch>,
}

impl ResolvedElement {
    /// Find the group for a selector.
    pub fn group(&self, modifier: &str, state: &str) -> Option<&PropertyGroup> {
        self.grouped_properties
            .iter()
            .find(|g| g.modifier_path == modifier && g.state == state)
    }

    /// Find the batch for a breakpoint width.
    pub fn batch(&self, width: u32) -> Option<&PropertyBatch> {
        self.batched_properties
            .iter()
            .find(|b| b.breakpoint_width == width)
    }
}

/// Resolves element declarations against a token set.
pub struct ElementResolver<'a> {
    breakpoints: &'a BreakpointTable,
    aliases: &'a AliasIndex,
    tokens: &'a GroupedTokens,
}

/// Output collected while walking one element.
struct ElementOutput {
    grouped: Vec<PropertyGroup>,
    batched: Vec<PropertyBatch>,
}

impl ElementOutput {
    fn new() -> Self {
        Self {
            grouped: Vec::new(),
            batched: vec![PropertyBatch::empty(0)],
        }
    }

    /// The selector group, created when its first property arrives.
    fn group_mut(&mut self, modifier: &str, state: &str) -> &mut PropertyGroup {
        let index = match self
            .grouped
            .iter()
            .position(|g| g.modifier_path == modifier && g.state == state)
        {
            Some(index) => index,
            None => {
                self.grouped.push(PropertyGroup {
                    modifier_path: modifier.to_string(),
                    state: state.to_string(),
                    properties: Vec::new(),
                });
                self.grouped.len() - 1
            }
        };
        &mut self.grouped[index]
    }

    fn batched_group_mut(&mut self, width: u32, modifier: &str, state: &str) -> &mut BatchedGroup {
        batch_mut(&mut self.batched, width).group_mut(modifier, state)
    }
}

impl<'a> ElementResolver<'a> {
    pub fn new(
        breakpoints: &'a BreakpointTable,
        aliases: &'a AliasIndex,
        tokens: &'a GroupedTokens,
    ) -> Self {
        Self {
            breakpoints,
            aliases,
            tokens,
        }
    }

    /// Resolve one element declaration.
    pub fn resolve(&self, name: &str, declaration: &Object) -> ResolvedElement {
        let mut out = ElementOutput::new();
        self.walk(declaration, "", "", &mut out);
        sort_batches(&mut out.batched);

        log::debug!(
            "resolved element '{}': {} group(s), {} batch(es)",
            name,
            out.grouped.len(),
            out.batched.len()
        );

        ResolvedElement {
            name: name.to_string(),
            hyphen_name: camel_to_hyphen(name),
            grouped_properties: out.grouped,
            batched_properties: out.batched,
        }
    }

    fn walk(&self, node: &Object, modifier: &str, state: &str, out: &mut ElementOutput) {
        for (key, child) in node.iter() {
            match classify(key, child, self.breakpoints) {
                Classified::Leaf(value) => self.add_leaf(key, value, modifier, state, out),
                Classified::BreakpointSet(values) => {
                    self.add_breakpoint_set(key, values, modifier, state, out)
                }
                Classified::State(fragment) => {
                    let state = format!("{}{}", state, key);
                    self.walk(fragment, modifier, &state, out);
                }
                Classified::Modifier(fragment) => {
                    let path = if modifier.is_empty() {
                        key.to_string()
                    } else {
                        format!("{}{}{}", modifier, MODIFIER_JOIN, key)
                    };
                    self.walk(fragment, &path, state, out);
                }
            }
        }
    }

    fn add_leaf(
        &self,
        property: &str,
        value: &Value,
        modifier: &str,
        state: &str,
        out: &mut ElementOutput,
    ) {
        let token = self.match_token(property, value, 0);
        let hyphen_name = camel_to_hyphen(property);

        out.batched_group_mut(0, modifier, state)
            .properties
            .push(BatchedProperty {
                name: property.to_string(),
                hyphen_name: hyphen_name.clone(),
                value: value.clone(),
                matched_token: token.clone(),
            });

        out.group_mut(modifier, state).properties.push(GroupedProperty {
            name: property.to_string(),
            hyphen_name,
            per_breakpoint_values: vec![BreakpointValue {
                breakpoint_width: 0,
                value: value.clone(),
                matched_token: token,
            }],
        });
    }

    fn add_breakpoint_set(
        &self,
        property: &str,
        values: &Object,
        modifier: &str,
        state: &str,
        out: &mut ElementOutput,
    ) {
        let hyphen_name = camel_to_hyphen(property);
        let mut per_breakpoint_values = Vec::with_capacity(values.len());

        for (breakpoint, node) in values.iter() {
            // Classification guarantees known names and scalar values
            let (Some(width), Some(value)) = (self.breakpoints.width_of(breakpoint), node.as_scalar())
            else {
                continue;
            };
            let token = self.match_token(property, value, width);

            out.batched_group_mut(width, modifier, state)
                .properties
                .push(BatchedProperty {
                    name: property.to_string(),
                    hyphen_name: hyphen_name.clone(),
                    value: value.clone(),
                    matched_token: token.clone(),
                });

            per_breakpoint_values.push(BreakpointValue {
                breakpoint_width: width,
                value: value.clone(),
                matched_token: token,
            });
        }

        out.group_mut(modifier, state).properties.push(GroupedProperty {
            name: property.to_string(),
            hyphen_name,
            per_breakpoint_values,
        });
    }

    fn match_token(&self, property: &str, value: &Value, width: u32) -> Option<TokenRef> {
        let category = self.aliases.resolve_category(property);
        self.tokens.match_value(category, value, width)
    }
}
