//! Finite element formulations for planar line structures.
//!
//! All element matrices are built in the local coordinate system (LCS)
//! with the local x axis along the element chord, in the freedom order
//! (u_a, w_a, phi_a, u_b, w_b, phi_b). The rotation phi follows the
//! right-handed x-z convention of the global frame, so the bending
//! coupling terms carry the opposite sign of most textbook tables.
//! Global matrices follow from K_g = T' K_l T with the block-diagonal
//! transformation built by [`transformation`].

use frame2d_model::{CrossSection, Material, Node};
use nalgebra::{Matrix6, Vector6};

use crate::error::{Result, SolverError};

pub mod bar;
pub mod factory;
pub mod rod;

pub use bar::Bar2D;
pub use factory::LineElement;
pub use rod::Rod2D;

/// Section and material data evaluated at a single temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementProperties {
    /// Chord length.
    pub length: f64,
    /// Axial rigidity E A.
    pub ea: f64,
    /// Bending rigidity E I.
    pub ei: f64,
    /// Mass per unit length, structural plus non-structural.
    pub mass_per_length: f64,
    /// Thermal expansion coefficient.
    pub alpha: f64,
}

impl ElementProperties {
    /// Evaluate material and section data at a temperature.
    pub fn evaluate(
        material: &Material,
        section: &CrossSection,
        length: f64,
        temperature: f64,
    ) -> Self {
        let e = material.youngs_modulus.value_at(temperature);
        let ro = material.density.value_at(temperature);
        Self {
            length,
            ea: e * section.area,
            ei: e * section.inertia,
            mass_per_length: ro * section.area + section.nonstructural_mass,
            alpha: material.thermal_expansion.value_at(temperature),
        }
    }

    /// Total element mass.
    pub fn mass(&self) -> f64 {
        self.mass_per_length * self.length
    }
}

/// Element interface for the planar line formulations.
///
/// Matrices and load vectors are returned in the LCS; the caller
/// transforms them with the element transformation matrix.
pub trait Element {
    /// Element id, used in diagnostics.
    fn id(&self) -> i32;

    /// Which of the six end freedoms the element connects. Masked-out
    /// freedoms are never localized and their matrix entries are zero.
    fn dof_mask(&self) -> [bool; 6];

    /// Which of the six end freedoms are released from the shared
    /// nodal freedom and receive their own equation number.
    fn releases(&self) -> [bool; 6];

    /// Stiffness matrix in the LCS.
    fn stiffness_lcs(&self, props: &ElementProperties) -> Matrix6<f64>;

    /// Mass matrix in the LCS as the convex blend
    /// `(1 - lumped_fraction) * consistent + lumped_fraction * lumped`.
    /// The fraction is clamped to [0, 1].
    fn mass_lcs(&self, props: &ElementProperties, lumped_fraction: f64) -> Matrix6<f64>;

    /// Equivalent nodal loads in the LCS for uniform distributed loads
    /// fx (axial) and fz (transverse) per unit length.
    fn load_lcs(&self, props: &ElementProperties, fx: f64, fz: f64) -> Vector6<f64>;

    /// Equivalent nodal loads in the LCS for a uniform temperature
    /// rise dt above the reference temperature.
    fn thermal_load_lcs(&self, props: &ElementProperties, dt: f64) -> Vector6<f64>;

    /// Initial-stress (geometric) matrix in the LCS for a given axial
    /// force. The axial freedoms receive a small placeholder stiffness
    /// scaled by `regularization` so the matrix stays non-singular
    /// when used on its own.
    fn geometric_lcs(
        &self,
        props: &ElementProperties,
        axial_force: f64,
        regularization: f64,
    ) -> Matrix6<f64>;
}

/// Chord length between two nodes.
pub fn chord_length(a: &Node, b: &Node) -> f64 {
    let dx = b.x() - a.x();
    let dz = b.z() - a.z();
    (dx * dx + dz * dz).sqrt()
}

/// Transformation matrix from GCS to LCS displacements, with the chord
/// length. Rotations are in-plane and pass through unchanged.
pub fn transformation(a: &Node, b: &Node, element_id: i32) -> Result<(Matrix6<f64>, f64)> {
    let length = chord_length(a, b);
    if length <= f64::EPSILON {
        return Err(SolverError::DegenerateGeometry(element_id));
    }
    let c = (b.x() - a.x()) / length;
    let s = (b.z() - a.z()) / length;

    let mut t = Matrix6::zeros();
    for block in [0, 3] {
        t[(block, block)] = c;
        t[(block, block + 1)] = s;
        t[(block + 1, block)] = -s;
        t[(block + 1, block + 1)] = c;
        t[(block + 2, block + 2)] = 1.0;
    }
    Ok((t, length))
}
