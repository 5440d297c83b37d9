//! Element force recovery.
//!
//! Gathers each element's end displacements from the global solution,
//! rotates them into the LCS and multiplies by the local stiffness.
//! The result per element is the end-force vector
//! (N_a, V_a, M_a, N_b, V_b, M_b) in the LCS. Unassigned freedoms
//! read as zero, so rod rotations and detached releases drop out.

use frame2d_model::Model;
use nalgebra::{DVector, Vector6};

use crate::elements::{transformation, ElementProperties, LineElement};
use crate::error::Result;
use crate::localization::DofMap;

/// Recover element end forces in element declaration order.
pub fn element_forces(
    model: &Model,
    dof_map: &DofMap,
    displacements: &DVector<f64>,
    reference_temperature: f64,
) -> Result<Vec<Vector6<f64>>> {
    let mut forces = Vec::with_capacity(model.elements.len());

    for (e, record) in model.elements.iter().enumerate() {
        let node_a = model
            .nodes
            .get(record.ends[0])
            .ok_or(frame2d_model::ModelError::UnknownNode(record.ends[0]))?;
        let node_b = model
            .nodes
            .get(record.ends[1])
            .ok_or(frame2d_model::ModelError::UnknownNode(record.ends[1]))?;
        let material = model
            .materials
            .get(record.material)
            .ok_or(frame2d_model::ModelError::UnknownMaterial(record.material))?;
        let section = model
            .sections
            .get(record.section)
            .ok_or(frame2d_model::ModelError::UnknownSection(record.section))?;

        let (t, length) = transformation(node_a, node_b, record.id)?;
        let props = ElementProperties::evaluate(material, section, length, reference_temperature);
        let element = LineElement::from_record(record);

        let mut ue = Vector6::zeros();
        for (i, &dof) in dof_map.element_dofs[e].iter().enumerate() {
            if dof != 0 {
                ue[i] = displacements[dof - 1];
            }
        }

        let k_local = element.as_dyn().stiffness_lcs(&props);
        forces.push(k_local * (t * ue));
    }

    Ok(forces)
}

/// Axial force per element, taken from the end B normal component.
/// Positive in tension. Input for the geometric stiffness.
pub fn axial_forces(element_forces: &[Vector6<f64>]) -> Vec<f64> {
    element_forces.iter().map(|s| s[3]).collect()
}

// Integration coverage lives in the workspace tests; the closed-form
// cases there exercise gather, rotation and recovery together.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axial_force_reads_end_b_component() {
        let s = Vector6::new(-5.0, 1.0, 2.0, 5.0, -1.0, 3.0);
        assert_eq!(axial_forces(&[s]), vec![5.0]);
    }
}
