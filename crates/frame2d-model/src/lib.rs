//! Entity model for planar frame structures.
//!
//! This crate holds the structural description only: nodes in the x-z
//! plane, linear-elastic materials with optional temperature tables,
//! beam cross-sections and two-node line elements. All entities are
//! referenced by integer id through insertion-ordered collections.
//! The finite element formulation lives in the solver crate.

pub mod element;
pub mod error;
pub mod material;
pub mod node;
pub mod section;

pub use element::{Element, ElementKind, Elements};
pub use error::{ModelError, Result};
pub use material::{Material, Materials, TempTable};
pub use node::{Node, Nodes, MAX_LABEL_LEN};
pub use section::{CrossSection, CrossSections};

/// A complete structural model.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub nodes: Nodes,
    pub materials: Materials,
    pub sections: CrossSections,
    pub elements: Elements,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every element reference resolves.
    pub fn validate(&self) -> Result<()> {
        for element in self.elements.iter() {
            for &node in &element.ends {
                if self.nodes.get(node).is_none() {
                    return Err(ModelError::UnknownNode(node));
                }
            }
            if self.materials.get(element.material).is_none() {
                return Err(ModelError::UnknownMaterial(element.material));
            }
            if self.sections.get(element.section).is_none() {
                return Err(ModelError::UnknownSection(element.section));
            }
        }
        Ok(())
    }
}
