//! Two-node axial rod element.
//!
//! Carries axial force only. Its rotational freedoms are masked out
//! and never enter the global system; transverse freedoms connect so
//! the rod can carry lumped mass and follow the frame kinematics, but
//! they contribute no stiffness of their own.

use nalgebra::{Matrix6, Vector6};

use super::{Element, ElementProperties};

/// Planar axial rod.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rod2D {
    pub id: i32,
}

impl Rod2D {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl Element for Rod2D {
    fn id(&self) -> i32 {
        self.id
    }

    fn dof_mask(&self) -> [bool; 6] {
        [true, true, false, true, true, false]
    }

    fn releases(&self) -> [bool; 6] {
        [false; 6]
    }

    fn stiffness_lcs(&self, props: &ElementProperties) -> Matrix6<f64> {
        let k = props.ea / props.length;
        let mut m = Matrix6::zeros();
        m[(0, 0)] = k;
        m[(0, 3)] = -k;
        m[(3, 0)] = -k;
        m[(3, 3)] = k;
        m
    }

    fn mass_lcs(&self, props: &ElementProperties, lumped_fraction: f64) -> Matrix6<f64> {
        let lumped_fraction = lumped_fraction.clamp(0.0, 1.0);
        let mass = props.mass();
        let mut consistent = Matrix6::zeros();
        // Linear shape functions on both translational pairs.
        for pair in [(0, 3), (1, 4)] {
            consistent[(pair.0, pair.0)] = mass / 3.0;
            consistent[(pair.1, pair.1)] = mass / 3.0;
            consistent[(pair.0, pair.1)] = mass / 6.0;
            consistent[(pair.1, pair.0)] = mass / 6.0;
        }

        let mut lumped = Matrix6::zeros();
        for i in [0, 1, 3, 4] {
            lumped[(i, i)] = mass / 2.0;
        }

        consistent * (1.0 - lumped_fraction) + lumped * lumped_fraction
    }

    fn load_lcs(&self, props: &ElementProperties, fx: f64, fz: f64) -> Vector6<f64> {
        let l = props.length;
        Vector6::new(
            fx * l / 2.0,
            -fz * l / 2.0,
            0.0,
            fx * l / 2.0,
            -fz * l / 2.0,
            0.0,
        )
    }

    fn thermal_load_lcs(&self, props: &ElementProperties, dt: f64) -> Vector6<f64> {
        let n = props.ea * props.alpha * dt;
        Vector6::new(-n, 0.0, 0.0, n, 0.0, 0.0)
    }

    fn geometric_lcs(
        &self,
        props: &ElementProperties,
        axial_force: f64,
        regularization: f64,
    ) -> Matrix6<f64> {
        let g = axial_force / props.length;
        let eps = regularization * g.abs();

        let mut m = Matrix6::zeros();
        m[(1, 1)] = g;
        m[(4, 4)] = g;
        m[(1, 4)] = -g;
        m[(4, 1)] = -g;

        m[(0, 0)] = eps;
        m[(3, 3)] = eps;
        m[(0, 3)] = -eps;
        m[(3, 0)] = -eps;
        m
    }
}
