//! Tab-indented document parsing.
//!
//! Each line is `name value...`, nested under the nearest line one tab
//! shallower. The parser never fails: lines that cannot be placed attach to
//! the root, and a scalar that later gains children is promoted to an object.

use super::tree::{Node, Object};
use super::value::{coerce_value, Value};

/// One meaningful line of input.
#[derive(Debug, Clone, PartialEq)]
pub struct LineNode {
    /// Number of leading tabs
    pub depth: usize,
    pub name: String,
    /// Raw value, words re-joined with single spaces
    pub value: String,
}

/// Where the last line at a given depth was inserted.
#[derive(Debug, Clone)]
struct RailEntry {
    /// Path from the root to the object the line was inserted into
    parent: Vec<String>,
    name: String,
}

impl RailEntry {
    /// Path to the node this entry inserted.
    fn node_path(&self) -> Vec<String> {
        let mut path = self.parent.clone();
        path.push(self.name.clone());
        path
    }
}

/// Parse a document using the standard value coercion.
pub fn parse_tabbed_content(input: &str) -> Object {
    parse_tabbed_content_with(input, coerce_value)
}

/// Parse a document with a custom leaf converter.
///
/// The converter returns `None` for "no value", which becomes an empty object.
pub fn parse_tabbed_content_with<F>(input: &str, convert: F) -> Object
where
    F: Fn(&str) -> Option<Value>,
{
    let mut root = Object::new();
    let mut rail: Vec<Option<RailEntry>> = Vec::new();

    for line in input.lines().filter_map(split_line) {
        let parent = parent_path(&rail, line.depth);

        let node = match convert(&line.value) {
            Some(value) => Node::Scalar(value),
            None => Node::Object(Object::new()),
        };
        root.object_at_mut(&parent).insert(line.name.clone(), node);

        if rail.len() <= line.depth {
            rail.resize(line.depth + 1, None);
        }
        rail[line.depth] = Some(RailEntry {
            parent,
            name: line.name,
        });
    }

    root
}

/// Resolve the parent path for a line at `depth`.
fn parent_path(rail: &[Option<RailEntry>], depth: usize) -> Vec<String> {
    if depth == 0 {
        return Vec::new();
    }
    match rail.get(depth - 1).and_then(Option::as_ref) {
        Some(entry) => entry.node_path(),
        None => {
            log::debug!(
                "no parent at depth {}, attaching line at depth {} to root",
                depth - 1,
                depth
            );
            Vec::new()
        }
    }
}

/// Split a raw line into depth, name and value. Blank lines give `None`.
pub fn split_line(line: &str) -> Option<LineNode> {
    let depth = count_tabs(line);
    let rest = &line[depth..];

    let mut words = rest.split_whitespace();
    let name = words.next()?;
    let value = words.collect::<Vec<_>>().join(" ");

    Some(LineNode {
        depth,
        name: name.to_string(),
        value,
    })
}

/// Count leading tab characters.
pub fn count_tabs(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'\t').count()
}
