//! Cross-section properties for line elements.

use std::collections::HashMap;

use crate::error::{ModelError, Result};
use crate::node::crop_label;

/// Beam cross-section properties.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    /// Unique section id.
    pub id: i32,
    /// Optional label, cropped to 16 characters.
    pub label: Option<String>,
    /// Cross-sectional area A.
    pub area: f64,
    /// Second moment of area I about the bending axis.
    pub inertia: f64,
    /// Section modulus W.
    pub section_modulus: f64,
    /// Effective shear area A_sh.
    pub shear_area: f64,
    /// Non-structural mass per unit length.
    pub nonstructural_mass: f64,
}

impl CrossSection {
    /// Create a section with explicit properties.
    pub fn new(
        id: i32,
        label: &str,
        area: f64,
        inertia: f64,
        section_modulus: f64,
        shear_area: f64,
        nonstructural_mass: f64,
    ) -> Self {
        Self {
            id,
            label: Some(crop_label(label)),
            area,
            inertia,
            section_modulus,
            shear_area,
            nonstructural_mass,
        }
    }
}

/// Cross-section collection keyed by id.
#[derive(Debug, Clone, Default)]
pub struct CrossSections {
    items: Vec<CrossSection>,
    index: HashMap<i32, usize>,
}

impl CrossSections {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section, rejecting duplicate ids.
    pub fn add(&mut self, section: CrossSection) -> Result<()> {
        if self.index.contains_key(&section.id) {
            return Err(ModelError::DuplicateId {
                kind: "cross section",
                id: section.id,
            });
        }
        self.index.insert(section.id, self.items.len());
        self.items.push(section);
        Ok(())
    }

    /// Look up a section by id.
    pub fn get(&self, id: i32) -> Option<&CrossSection> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CrossSection> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crops_multibyte_labels_by_characters() {
        let section = CrossSection::new(1, "œœœœœœœœœœœœœœœœœœ", 1.0, 1.0, 1.0, 1.0, 0.0);
        assert_eq!(section.label.as_deref(), Some("œœœœœœœœœœœœœœœœ"));
    }

    #[test]
    fn rejects_duplicate_section_id() {
        let mut sections = CrossSections::new();
        sections
            .add(CrossSection::new(1, "beam", 2124.0, 3.49e6, 7.28e4, 756.0, 0.0))
            .unwrap();
        let err = sections
            .add(CrossSection::new(1, "other", 1.0, 1.0, 1.0, 1.0, 0.0))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateId {
                kind: "cross section",
                id: 1
            }
        );
    }
}
