//! Partitioned linear solve.
//!
//! Constrained freedoms hold equations 1..=num_constrained, so the
//! global matrices split into contiguous blocks:
//!
//! ```text
//! | K_cc  K_cf | | 0   |   | f_c + r |
//! | K_fc  K_ff | | u_f | = | f_f     |
//! ```
//!
//! Supports are fixed at zero, so the free block solves on its own and
//! the reactions follow by back-substitution. A reaction balances both
//! the element forces and any load applied directly at the support.

use nalgebra::DVector;

use crate::assembly::GlobalSystem;
use crate::error::{Result, SolverError};

/// Relative pivot ratio below which the free block is treated as
/// singular.
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Displacements and reactions of a solved system.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Full-length displacement vector; constrained entries are zero.
    pub displacements: DVector<f64>,
    /// Reaction forces at the constrained freedoms, in equation order.
    pub reactions: DVector<f64>,
}

/// Solve the free partition and back-substitute the reactions.
pub fn partition_solve(system: &GlobalSystem) -> Result<Solution> {
    let n = system.num_dofs;
    let nc = system.num_constrained;
    let nf = n - nc;

    let mut displacements = DVector::zeros(n);

    if nf > 0 {
        let kff = system.stiffness.view((nc, nc), (nf, nf)).clone_owned();
        let ff = system.load.rows(nc, nf).clone_owned();

        let lu = kff.lu();
        let diag = lu.u().diagonal();
        let max_pivot = diag.iter().fold(0.0f64, |acc, d| acc.max(d.abs()));
        let min_pivot = diag.iter().fold(f64::INFINITY, |acc, d| acc.min(d.abs()));
        if max_pivot == 0.0 || min_pivot < PIVOT_TOLERANCE * max_pivot {
            return Err(SolverError::SingularSystem);
        }

        let uf = lu.solve(&ff).ok_or(SolverError::SingularSystem)?;
        displacements.rows_mut(nc, nf).copy_from(&uf);
    }

    let kcf = system.stiffness.view((0, nc), (nc, nf)).clone_owned();
    let uf = displacements.rows(nc, nf).clone_owned();
    let fc = system.load.rows(0, nc).clone_owned();
    let reactions = kcf * uf - fc;

    Ok(Solution {
        displacements,
        reactions,
    })
}
