//! Line element records.
//!
//! An element record ties two nodes to a material and a cross-section.
//! It carries no matrices; the solver crate builds the finite element
//! formulation from these records.

use std::collections::HashMap;

use crate::error::{ModelError, Result};

/// Element formulation kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Axial-only rod. Carries no bending, its rotational freedoms are
    /// never localized.
    Rod,
    /// Bernoulli beam with optional end releases.
    ///
    /// A released flag per local freedom (u, w, phi) at each end; a
    /// released freedom is disconnected from the node and receives its
    /// own equation number.
    Bar {
        release_a: [bool; 3],
        release_b: [bool; 3],
    },
}

/// A two-node line element referencing nodes, material and section by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Unique element id.
    pub id: i32,
    /// Material id.
    pub material: i32,
    /// Cross-section id.
    pub section: i32,
    /// Node ids at end A and end B.
    pub ends: [i32; 2],
    /// Formulation kind.
    pub kind: ElementKind,
}

impl Element {
    /// Axial rod between two nodes.
    pub fn rod(id: i32, material: i32, section: i32, node_a: i32, node_b: i32) -> Self {
        Self {
            id,
            material,
            section,
            ends: [node_a, node_b],
            kind: ElementKind::Rod,
        }
    }

    /// Bernoulli beam between two nodes, fully connected at both ends.
    pub fn bar(id: i32, material: i32, section: i32, node_a: i32, node_b: i32) -> Self {
        Self {
            id,
            material,
            section,
            ends: [node_a, node_b],
            kind: ElementKind::Bar {
                release_a: [false; 3],
                release_b: [false; 3],
            },
        }
    }

    /// Bernoulli beam with end releases given as (u, w, phi) flags per end.
    pub fn bar_released(
        id: i32,
        material: i32,
        section: i32,
        node_a: i32,
        node_b: i32,
        release_a: &[bool],
        release_b: &[bool],
    ) -> Result<Self> {
        let release_a: [bool; 3] =
            release_a
                .try_into()
                .map_err(|_| ModelError::DimensionMismatch {
                    context: "end A release flags",
                    expected: 3,
                    got: release_a.len(),
                })?;
        let release_b: [bool; 3] =
            release_b
                .try_into()
                .map_err(|_| ModelError::DimensionMismatch {
                    context: "end B release flags",
                    expected: 3,
                    got: release_b.len(),
                })?;
        Ok(Self {
            id,
            material,
            section,
            ends: [node_a, node_b],
            kind: ElementKind::Bar {
                release_a,
                release_b,
            },
        })
    }
}

/// Insertion-ordered element collection keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Elements {
    items: Vec<Element>,
    index: HashMap<i32, usize>,
}

impl Elements {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element, rejecting duplicate ids.
    pub fn add(&mut self, element: Element) -> Result<()> {
        if self.index.contains_key(&element.id) {
            return Err(ModelError::DuplicateId {
                kind: "element",
                id: element.id,
            });
        }
        self.index.insert(element.id, self.items.len());
        self.items.push(element);
        Ok(())
    }

    /// Look up an element by id.
    pub fn get(&self, id: i32) -> Option<&Element> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Positional index of an element in declaration order.
    pub fn position(&self, id: i32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over elements in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_defaults_to_no_releases() {
        let bar = Element::bar(1, 1, 1, 1, 2);
        assert_eq!(
            bar.kind,
            ElementKind::Bar {
                release_a: [false; 3],
                release_b: [false; 3],
            }
        );
    }

    #[test]
    fn release_flags_require_three_entries() {
        let err =
            Element::bar_released(1, 1, 1, 1, 2, &[false, false], &[false; 3]).unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                context: "end A release flags",
                expected: 3,
                got: 2
            }
        );

        let hinged = Element::bar_released(2, 1, 1, 2, 3, &[false, false, true], &[false; 3]);
        assert!(hinged.is_ok());
    }

    #[test]
    fn rejects_duplicate_element_id() {
        let mut elements = Elements::new();
        elements.add(Element::rod(1, 1, 1, 1, 2)).unwrap();
        let err = elements.add(Element::bar(1, 1, 1, 2, 3)).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateId {
                kind: "element",
                id: 1
            }
        );
    }
}
