//! Generic tree produced by the indentation parser.
//!
//! A node is either a coerced scalar or an ordered mapping. Key order is the
//! order of first declaration, which everything downstream relies on.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::value::Value;

/// A node in the parsed tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Value),
    Object(Object),
}

impl Node {
    /// Borrow as an object, if this node is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(obj) => Some(obj),
            Node::Scalar(_) => None,
        }
    }

    /// Borrow as a scalar, if this node is one.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Node::Scalar(value) => Some(value),
            Node::Object(_) => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::Scalar(value)
    }
}

impl From<Object> for Node {
    fn from(obj: Object) -> Self {
        Node::Object(obj)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Scalar(value) => value.serialize(serializer),
            Node::Object(obj) => obj.serialize(serializer),
        }
    }
}

/// An insertion-ordered mapping from key to node.
///
/// Documents are small, so lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: Vec<(String, Node)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. An existing key keeps its position and has its node replaced.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = node,
            None => self.entries.push((key, node)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Get a child object by key. Scalars and missing keys give `None`.
    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.get(key).and_then(Node::as_object)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk `path` from this object, returning the object at the end.
    ///
    /// Missing keys are created and scalars along the way are promoted to
    /// empty objects, discarding their value.
    pub fn object_at_mut(&mut self, path: &[String]) -> &mut Object {
        let mut current = self;
        for key in path {
            current = current.child_object_mut(key);
        }
        current
    }

    /// Get the child object under `key`, creating or promoting it as needed.
    fn child_object_mut(&mut self, key: &str) -> &mut Object {
        let index = match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.entries
                    .push((key.to_string(), Node::Object(Object::new())));
                self.entries.len() - 1
            }
        };

        let node = &mut self.entries[index].1;
        if let Node::Scalar(value) = node {
            log::trace!("promoting scalar {:?} at '{}' to object", value, key);
            *node = Node::Object(Object::new());
        }

        match node {
            Node::Object(obj) => obj,
            Node::Scalar(_) => unreachable!("scalar promoted above"),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (key, node) in iter {
            obj.insert(key, node);
        }
        obj
    }
}
