//! Node entities for planar structures.

use std::collections::HashMap;

use crate::error::{ModelError, Result};

/// Maximum label length kept on an entity; longer labels are cropped.
pub const MAX_LABEL_LEN: usize = 16;

/// Crop a label to [`MAX_LABEL_LEN`] characters. Counts characters,
/// not bytes, so multi-byte labels never split mid-character.
pub(crate) fn crop_label(label: &str) -> String {
    label.chars().take(MAX_LABEL_LEN).collect()
}

/// A node in the 2D structural model.
///
/// Coordinates live in the global x-z plane and are immutable after
/// construction. Elements refer to nodes by id and never own them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: i32,
    x: f64,
    z: f64,
    label: Option<String>,
}

impl Node {
    /// Create a new node at the given global coordinates.
    pub fn new(id: i32, x: f64, z: f64) -> Self {
        Self {
            id,
            x,
            z,
            label: None,
        }
    }

    /// Create a labelled node. Labels are cropped to 16 characters.
    pub fn with_label(id: i32, x: f64, z: f64, label: &str) -> Self {
        Self {
            id,
            x,
            z,
            label: Some(crop_label(label)),
        }
    }

    /// Node id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Global x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Global z coordinate.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Optional label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Coordinates as an array.
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.z]
    }
}

/// Insertion-ordered node collection keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Nodes {
    items: Vec<Node>,
    index: HashMap<i32, usize>,
}

impl Nodes {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, rejecting duplicate ids.
    pub fn add(&mut self, node: Node) -> Result<()> {
        if self.index.contains_key(&node.id) {
            return Err(ModelError::DuplicateId {
                kind: "node",
                id: node.id,
            });
        }
        self.index.insert(node.id, self.items.len());
        self.items.push(node);
        Ok(())
    }

    /// Look up a node by id.
    pub fn get(&self, id: i32) -> Option<&Node> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Positional index of a node in declaration order.
    pub fn position(&self, id: i32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_finds_nodes() {
        let mut nodes = Nodes::new();
        nodes.add(Node::new(1, 0.0, 0.0)).unwrap();
        nodes.add(Node::new(5, 3.0, -2.0)).unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes.get(5).unwrap().coords(), [3.0, -2.0]);
        assert_eq!(nodes.position(1), Some(0));
        assert_eq!(nodes.position(5), Some(1));
        assert!(nodes.get(2).is_none());
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut nodes = Nodes::new();
        nodes.add(Node::new(1, 0.0, 0.0)).unwrap();
        let err = nodes.add(Node::new(1, 1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateId {
                kind: "node",
                id: 1
            }
        );
    }

    #[test]
    fn crops_long_labels() {
        let node = Node::with_label(1, 0.0, 0.0, "a-very-long-node-label");
        assert_eq!(node.label(), Some("a-very-long-node"));
    }

    #[test]
    fn crops_labels_by_characters_not_bytes() {
        // The 16th character is multi-byte; a byte crop would split it.
        let node = Node::with_label(1, 0.0, 0.0, "aaaaaaaaaaaaaaa€xyz");
        assert_eq!(node.label(), Some("aaaaaaaaaaaaaaa€"));
    }
}
