//! DOF localization.
//!
//! Assigns 1-based global equation numbers to nodal and element
//! freedoms; 0 marks a freedom that never enters the system. Two
//! passes:
//!
//! 1. Constraints, in declaration order, number the freedoms they fix.
//!    After this pass numbers 1..=num_constrained are exactly the
//!    constrained freedoms, which makes the solve a clean partition.
//! 2. Elements, in declaration order, number the remaining freedoms
//!    they connect. A released freedom always mints a fresh number
//!    recorded only in the element table, leaving the nodal freedom to
//!    whichever other element connects it.
//!
//! Freedoms masked out by the element formulation (a rod's rotations)
//! stay 0 and are skipped by assembly and postprocessing.

use frame2d_model::{Model, ModelError};

use crate::elements::LineElement;
use crate::error::Result;
use crate::Constraint;

/// Equation numbering for a model under a set of constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct DofMap {
    /// Global numbers per node, by node position, (u, w, phi).
    pub node_dofs: Vec<[usize; 3]>,
    /// Global numbers per element, by element position, in
    /// (u_a, w_a, phi_a, u_b, w_b, phi_b) order.
    pub element_dofs: Vec<[usize; 6]>,
    /// Total equations assigned.
    pub num_dofs: usize,
    /// Equations 1..=num_constrained belong to constrained freedoms.
    pub num_constrained: usize,
}

impl DofMap {
    /// Number the freedoms of a model.
    pub fn build(model: &Model, constraints: &[Constraint]) -> Result<Self> {
        let mut node_dofs = vec![[0usize; 3]; model.nodes.len()];
        let mut element_dofs = vec![[0usize; 6]; model.elements.len()];
        let mut next = 0usize;

        for constraint in constraints {
            let pos = model
                .nodes
                .position(constraint.node)
                .ok_or(ModelError::UnknownNode(constraint.node))?;
            for k in 0..3 {
                // A freedom fixed by several constraint rows keeps its
                // first number.
                if constraint.fixed[k] && node_dofs[pos][k] == 0 {
                    next += 1;
                    node_dofs[pos][k] = next;
                }
            }
        }
        let num_constrained = next;

        for (e, record) in model.elements.iter().enumerate() {
            let element = LineElement::from_record(record);
            let mask = element.as_dyn().dof_mask();
            let releases = element.as_dyn().releases();

            for end in 0..2 {
                let pos = model
                    .nodes
                    .position(record.ends[end])
                    .ok_or(ModelError::UnknownNode(record.ends[end]))?;
                for k in 0..3 {
                    let local = end * 3 + k;
                    if !mask[local] {
                        continue;
                    }
                    if releases[local] {
                        next += 1;
                        element_dofs[e][local] = next;
                    } else {
                        if node_dofs[pos][k] == 0 {
                            next += 1;
                            node_dofs[pos][k] = next;
                        }
                        element_dofs[e][local] = node_dofs[pos][k];
                    }
                }
            }
        }

        Ok(Self {
            node_dofs,
            element_dofs,
            num_dofs: next,
            num_constrained,
        })
    }
}
