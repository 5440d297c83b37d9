//! Global system assembly.
//!
//! Scatters element matrices and load vectors into dense global
//! storage using the 1-based equation numbers from the localization
//! tables. Index 0 marks a freedom outside the system and is skipped.
//! Dense storage is deliberate at this scale; the solve partitions by
//! index range because constrained freedoms are numbered first.

use nalgebra::{DMatrix, DVector, Matrix6, Vector6};

/// Assembled global matrices and load vector.
#[derive(Debug, Clone)]
pub struct GlobalSystem {
    /// Global stiffness matrix.
    pub stiffness: DMatrix<f64>,
    /// Global mass matrix, assembled on request only.
    pub mass: Option<DMatrix<f64>>,
    /// Global load vector.
    pub load: DVector<f64>,
    /// Total equations.
    pub num_dofs: usize,
    /// Equations 1..=num_constrained are constrained freedoms.
    pub num_constrained: usize,
}

impl GlobalSystem {
    /// Allocate an empty system.
    pub fn new(num_dofs: usize, num_constrained: usize) -> Self {
        Self {
            stiffness: DMatrix::zeros(num_dofs, num_dofs),
            mass: None,
            load: DVector::zeros(num_dofs),
            num_dofs,
            num_constrained,
        }
    }

    /// Scatter-add an element stiffness contribution in the GCS.
    pub fn add_matrix(&mut self, dofs: &[usize; 6], ke: &Matrix6<f64>) {
        Self::scatter(&mut self.stiffness, dofs, ke);
    }

    /// Scatter-add an element mass contribution in the GCS, allocating
    /// the mass matrix on first use.
    pub fn add_mass(&mut self, dofs: &[usize; 6], me: &Matrix6<f64>) {
        let mass = self
            .mass
            .get_or_insert_with(|| DMatrix::zeros(self.num_dofs, self.num_dofs));
        Self::scatter(mass, dofs, me);
    }

    /// Scatter-add an element load vector in the GCS.
    pub fn add_load(&mut self, dofs: &[usize; 6], fe: &Vector6<f64>) {
        for (i, &dof) in dofs.iter().enumerate() {
            if dof != 0 {
                self.load[dof - 1] += fe[i];
            }
        }
    }

    /// Add a concentrated nodal load through the nodal numbering.
    pub fn add_nodal_load(&mut self, dofs: &[usize; 3], fx: f64, fz: f64, my: f64) {
        for (&dof, value) in dofs.iter().zip([fx, fz, my]) {
            if dof != 0 {
                self.load[dof - 1] += value;
            }
        }
    }

    fn scatter(target: &mut DMatrix<f64>, dofs: &[usize; 6], local: &Matrix6<f64>) {
        for (i, &ia) in dofs.iter().enumerate() {
            if ia == 0 {
                continue;
            }
            for (j, &ja) in dofs.iter().enumerate() {
                if ja == 0 {
                    continue;
                }
                target[(ia - 1, ja - 1)] += local[(i, j)];
            }
        }
    }
}
