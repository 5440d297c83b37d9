//! Linear static analysis pipeline.
//!
//! Ties the stages together: validate the model, number the freedoms,
//! assemble the global system, solve the partitioned equations and
//! recover element forces. The pipeline is linear and one-shot; a
//! geometric stiffness can be assembled afterwards from the recovered
//! axial forces for use in a stability eigenproblem elsewhere.

use frame2d_model::{Model, ModelError};
use nalgebra::{DMatrix, Vector6};
use serde::{Deserialize, Serialize};

use crate::assembly::GlobalSystem;
use crate::boundary_conditions::BoundaryConditions;
use crate::elements::{transformation, ElementProperties, LineElement};
use crate::error::{Result, SolverError};
use crate::localization::DofMap;
use crate::postprocess::element_forces;
use crate::solve::partition_solve;

/// Analysis settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lumped fraction of the element mass matrices, in [0, 1].
    pub mass_blend: f64,
    /// Assemble the global mass matrix alongside the stiffness.
    pub assemble_mass: bool,
    /// Temperature at which material tables are evaluated and from
    /// which element temperature rises are measured.
    pub reference_temperature: f64,
    /// Scale of the placeholder axial stiffness in the geometric
    /// matrix.
    pub geometric_regularization: f64,
    /// Print progress to stderr.
    pub verbose: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mass_blend: 0.5,
            assemble_mass: false,
            reference_temperature: 0.0,
            geometric_regularization: 1.0e-3,
            verbose: false,
        }
    }
}

/// Results of a static analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResults {
    pub num_dofs: usize,
    pub num_constrained: usize,
    /// Equation numbers per node position, (u, w, phi), 0 unassigned.
    pub node_dofs: Vec<[usize; 3]>,
    /// Equation numbers per element position.
    pub element_dofs: Vec<[usize; 6]>,
    /// Global displacements in equation order; constrained entries
    /// are zero.
    pub displacements: Vec<f64>,
    /// Reactions at the constrained freedoms, in equation order.
    pub reactions: Vec<f64>,
    /// LCS end forces (N_a, V_a, M_a, N_b, V_b, M_b) per element.
    pub element_forces: Vec<[f64; 6]>,
}

/// One-shot linear static analysis of a model under its boundary
/// conditions.
pub struct StaticAnalysis<'a> {
    model: &'a Model,
    bcs: &'a BoundaryConditions,
    config: AnalysisConfig,
}

impl<'a> StaticAnalysis<'a> {
    pub fn new(model: &'a Model, bcs: &'a BoundaryConditions) -> Self {
        Self {
            model,
            bcs,
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_config(
        model: &'a Model,
        bcs: &'a BoundaryConditions,
        config: AnalysisConfig,
    ) -> Self {
        Self { model, bcs, config }
    }

    /// Run the pipeline.
    pub fn run(&self) -> Result<AnalysisResults> {
        self.model.validate()?;

        let dof_map = DofMap::build(self.model, &self.bcs.constraints)?;
        if self.config.verbose {
            eprintln!(
                "localized {} equations, {} constrained",
                dof_map.num_dofs, dof_map.num_constrained
            );
        }

        let system = assemble(self.model, self.bcs, &dof_map, &self.config)?;
        if self.config.verbose {
            eprintln!(
                "assembled {} x {} stiffness{}",
                system.num_dofs,
                system.num_dofs,
                if system.mass.is_some() {
                    " and mass"
                } else {
                    ""
                }
            );
        }

        let solution = partition_solve(&system)?;
        let forces = element_forces(
            self.model,
            &dof_map,
            &solution.displacements,
            self.config.reference_temperature,
        )?;
        if self.config.verbose {
            eprintln!("recovered forces for {} elements", forces.len());
        }

        Ok(AnalysisResults {
            num_dofs: dof_map.num_dofs,
            num_constrained: dof_map.num_constrained,
            node_dofs: dof_map.node_dofs,
            element_dofs: dof_map.element_dofs,
            displacements: solution.displacements.iter().copied().collect(),
            reactions: solution.reactions.iter().copied().collect(),
            element_forces: forces.iter().map(|s| (*s).into()).collect(),
        })
    }
}

/// Assemble the global system for a localized model.
pub fn assemble(
    model: &Model,
    bcs: &BoundaryConditions,
    dof_map: &DofMap,
    config: &AnalysisConfig,
) -> Result<GlobalSystem> {
    let mut system = GlobalSystem::new(dof_map.num_dofs, dof_map.num_constrained);
    let temperature = config.reference_temperature;

    for (e, record) in model.elements.iter().enumerate() {
        let node_a = model
            .nodes
            .get(record.ends[0])
            .ok_or(ModelError::UnknownNode(record.ends[0]))?;
        let node_b = model
            .nodes
            .get(record.ends[1])
            .ok_or(ModelError::UnknownNode(record.ends[1]))?;
        let material = model
            .materials
            .get(record.material)
            .ok_or(ModelError::UnknownMaterial(record.material))?;
        let section = model
            .sections
            .get(record.section)
            .ok_or(ModelError::UnknownSection(record.section))?;

        let (t, length) = transformation(node_a, node_b, record.id)?;
        let props = ElementProperties::evaluate(material, section, length, temperature);
        let element = LineElement::from_record(record);
        let dofs = &dof_map.element_dofs[e];

        let k_global = t.transpose() * element.as_dyn().stiffness_lcs(&props) * t;
        system.add_matrix(dofs, &k_global);

        if config.assemble_mass {
            let m_global =
                t.transpose() * element.as_dyn().mass_lcs(&props, config.mass_blend) * t;
            system.add_mass(dofs, &m_global);
        }

        for load in bcs.element_loads.iter().filter(|l| l.element == record.id) {
            let mut f_local = Vector6::zeros();
            if load.fx != 0.0 || load.fz != 0.0 {
                f_local += element.as_dyn().load_lcs(&props, load.fx, load.fz);
            }
            if load.dt != 0.0 {
                f_local += element.as_dyn().thermal_load_lcs(&props, load.dt);
            }
            let f_global = t.transpose() * f_local;
            system.add_load(dofs, &f_global);
        }
    }

    for load in &bcs.element_loads {
        if model.elements.get(load.element).is_none() {
            return Err(SolverError::UnknownElement(load.element));
        }
    }

    for load in &bcs.nodal_loads {
        let pos = model
            .nodes
            .position(load.node)
            .ok_or(ModelError::UnknownNode(load.node))?;
        system.add_nodal_load(&dof_map.node_dofs[pos], load.fx, load.fz, load.my);
    }

    Ok(system)
}

/// Assemble the global geometric (initial-stress) matrix from element
/// axial forces, one entry per element in declaration order.
pub fn geometric_system(
    model: &Model,
    dof_map: &DofMap,
    axial_forces: &[f64],
    config: &AnalysisConfig,
) -> Result<DMatrix<f64>> {
    if axial_forces.len() != model.elements.len() {
        return Err(SolverError::Model(ModelError::DimensionMismatch {
            context: "axial forces",
            expected: model.elements.len(),
            got: axial_forces.len(),
        }));
    }

    let mut geometric = DMatrix::zeros(dof_map.num_dofs, dof_map.num_dofs);

    for (e, record) in model.elements.iter().enumerate() {
        let node_a = model
            .nodes
            .get(record.ends[0])
            .ok_or(ModelError::UnknownNode(record.ends[0]))?;
        let node_b = model
            .nodes
            .get(record.ends[1])
            .ok_or(ModelError::UnknownNode(record.ends[1]))?;
        let material = model
            .materials
            .get(record.material)
            .ok_or(ModelError::UnknownMaterial(record.material))?;
        let section = model
            .sections
            .get(record.section)
            .ok_or(ModelError::UnknownSection(record.section))?;

        let (t, length) = transformation(node_a, node_b, record.id)?;
        let props =
            ElementProperties::evaluate(material, section, length, config.reference_temperature);
        let element = LineElement::from_record(record);

        let g_local = element.as_dyn().geometric_lcs(
            &props,
            axial_forces[e],
            config.geometric_regularization,
        );
        let g_global = t.transpose() * g_local * t;

        for (i, &ia) in dof_map.element_dofs[e].iter().enumerate() {
            if ia == 0 {
                continue;
            }
            for (j, &ja) in dof_map.element_dofs[e].iter().enumerate() {
                if ja == 0 {
                    continue;
                }
                geometric[(ia - 1, ja - 1)] += g_global[(i, j)];
            }
        }
    }

    Ok(geometric)
}
