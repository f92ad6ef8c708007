//! Reverse lookup from element property names to token categories.

use crate::parser::{Node, Object, Value};

/// Separator between a parent modifier and a property name.
pub const MODIFIER_JOIN: char = '=';

/// Maps each token category to the element properties that draw from it.
///
/// ```text
/// aliases
/// 	tokens
/// 		color backgroundColor,color,borderColor
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasIndex {
    categories: Vec<(String, Vec<String>)>,
}

impl AliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with its aliased property names.
    pub fn insert(&mut self, category: impl Into<String>, properties: Vec<String>) {
        self.categories.push((category.into(), properties));
    }

    /// Build from a document's `aliases` section.
    ///
    /// The table is read from the `tokens` sub-section when present, otherwise
    /// from the section itself. A single name is a one-item list.
    pub fn from_section(section: &Object) -> Self {
        let table = section.get_object("tokens").unwrap_or(section);
        let mut index = Self::new();

        for (category, node) in table.iter() {
            let properties = match node {
                Node::Scalar(Value::List(items)) => {
                    items.iter().map(|item| item.to_string()).collect()
                }
                Node::Scalar(value) => vec![value.to_string()],
                Node::Object(obj) => obj.keys().map(str::to_string).collect(),
            };
            index.insert(category, properties);
        }

        index
    }

    /// Find the category a property may reference.
    ///
    /// A `modifier=property` name is reduced to `property` first. Falls back
    /// to the bare property name when no category aliases it.
    pub fn resolve_category<'a>(&'a self, property: &'a str) -> &'a str {
        let bare = bare_property(property);
        self.categories
            .iter()
            .find(|(_, properties)| properties.iter().any(|p| p == bare))
            .map(|(category, _)| category.as_str())
            .unwrap_or(bare)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Strip any `modifier=` prefix from a property name.
pub fn bare_property(property: &str) -> &str {
    property
        .rsplit_once(MODIFIER_JOIN)
        .map(|(_, bare)| bare)
        .unwrap_or(property)
}
