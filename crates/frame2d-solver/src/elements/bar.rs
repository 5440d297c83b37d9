//! Two-node Bernoulli beam element.
//!
//! Cubic Hermite shape functions for bending, linear for the axial
//! direction, no shear deformation. With the x-z rotation convention
//! used here the shear-rotation coupling terms are the negatives of
//! the usual textbook 6EI/l² entries; the 12/6/4/2 magnitudes are the
//! standard ones.
//!
//! End releases decouple a local freedom from the shared nodal freedom
//! during localization; the matrices themselves are always the fully
//! connected ones.

use nalgebra::{Matrix6, Vector6};

use super::{Element, ElementProperties};

/// Planar Bernoulli beam with optional end releases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar2D {
    pub id: i32,
    pub release_a: [bool; 3],
    pub release_b: [bool; 3],
}

impl Bar2D {
    /// Beam fully connected at both ends.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            release_a: [false; 3],
            release_b: [false; 3],
        }
    }

    /// Beam with (u, w, phi) release flags per end.
    pub fn with_releases(id: i32, release_a: [bool; 3], release_b: [bool; 3]) -> Self {
        Self {
            id,
            release_a,
            release_b,
        }
    }
}

impl Element for Bar2D {
    fn id(&self) -> i32 {
        self.id
    }

    fn dof_mask(&self) -> [bool; 6] {
        [true; 6]
    }

    fn releases(&self) -> [bool; 6] {
        [
            self.release_a[0],
            self.release_a[1],
            self.release_a[2],
            self.release_b[0],
            self.release_b[1],
            self.release_b[2],
        ]
    }

    fn stiffness_lcs(&self, props: &ElementProperties) -> Matrix6<f64> {
        let l = props.length;
        let ka = props.ea / l;
        let k3 = 12.0 * props.ei / (l * l * l);
        let k2 = 6.0 * props.ei / (l * l);
        let k1 = props.ei / l;

        Matrix6::new(
            ka, 0.0, 0.0, -ka, 0.0, 0.0, //
            0.0, k3, -k2, 0.0, -k3, -k2, //
            0.0, -k2, 4.0 * k1, 0.0, k2, 2.0 * k1, //
            -ka, 0.0, 0.0, ka, 0.0, 0.0, //
            0.0, -k3, k2, 0.0, k3, k2, //
            0.0, -k2, 2.0 * k1, 0.0, k2, 4.0 * k1,
        )
    }

    fn mass_lcs(&self, props: &ElementProperties, lumped_fraction: f64) -> Matrix6<f64> {
        let lumped_fraction = lumped_fraction.clamp(0.0, 1.0);
        let mass = props.mass();
        let l = props.length;

        let mut consistent = Matrix6::zeros();
        // Linear axial pair.
        consistent[(0, 0)] = mass / 3.0;
        consistent[(3, 3)] = mass / 3.0;
        consistent[(0, 3)] = mass / 6.0;
        consistent[(3, 0)] = mass / 6.0;
        // Cubic Hermite bending block, rotation signs matching the
        // stiffness convention.
        let mw = mass / 420.0;
        consistent[(1, 1)] = 156.0 * mw;
        consistent[(4, 4)] = 156.0 * mw;
        consistent[(1, 4)] = 54.0 * mw;
        consistent[(4, 1)] = 54.0 * mw;

        consistent[(1, 2)] = -22.0 * l * mw;
        consistent[(2, 1)] = -22.0 * l * mw;
        consistent[(4, 5)] = 22.0 * l * mw;
        consistent[(5, 4)] = 22.0 * l * mw;
        consistent[(1, 5)] = 13.0 * l * mw;
        consistent[(5, 1)] = 13.0 * l * mw;
        consistent[(2, 4)] = -13.0 * l * mw;
        consistent[(4, 2)] = -13.0 * l * mw;

        consistent[(2, 2)] = 4.0 * l * l * mw;
        consistent[(5, 5)] = 4.0 * l * l * mw;
        consistent[(2, 5)] = -3.0 * l * l * mw;
        consistent[(5, 2)] = -3.0 * l * l * mw;

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
            fz * l * l / 12.0,
            fx * l / 2.0,
            -fz * l / 2.0,
            -fz * l * l / 12.0,
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
        let l = props.length;
        let g = axial_force / l;
        let gw = 6.0 / 5.0 * g;
        let gc = l / 10.0 * g;
        let gf = 2.0 * l * l / 15.0 * g;
        let gx = -l * l / 30.0 * g;
        let eps = regularization * gw.abs().min(gf.abs());

        Matrix6::new(
            eps, 0.0, 0.0, -eps, 0.0, 0.0, //
            0.0, gw, -gc, 0.0, -gw, -gc, //
            0.0, -gc, gf, 0.0, gc, gx, //
            -eps, 0.0, 0.0, eps, 0.0, 0.0, //
            0.0, -gw, gc, 0.0, gw, gc, //
            0.0, -gc, gx, 0.0, gc, gf,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector6;

    fn props() -> ElementProperties {
        ElementProperties {
            length: 3.0,
            ea: 100.0,
            ei: 1.0,
            mass_per_length: 2.0,
            alpha: 1.0e-5,
        }
    }

    #[test]
    fn stiffness_matches_hermite_coefficients() {
        let bar = Bar2D::new(1);
        let k = bar.stiffness_lcs(&props());
        let l: f64 = 3.0;

        assert!((k[(0, 0)] - 100.0 / l).abs() < 1e-12);
        assert!((k[(1, 1)] - 12.0 / l.powi(3)).abs() < 1e-12);
        assert!((k[(1, 2)] + 6.0 / l.powi(2)).abs() < 1e-12);
        assert!((k[(2, 2)] - 4.0 / l).abs() < 1e-12);
        assert!((k[(2, 5)] - 2.0 / l).abs() < 1e-12);
        assert!((k - k.transpose()).norm() < 1e-12);
    }

    #[test]
    fn rigid_body_modes_produce_no_force() {
        let bar = Bar2D::new(1);
        let k = bar.stiffness_lcs(&props());
        let l = 3.0;

        let translation_x = Vector6::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let translation_z = Vector6::new(0.0, 1.0, 0.0, 0.0, 1.0, 0.0);
        // In-plane rotation about end A in this rotation convention.
        let rotation = Vector6::new(0.0, 0.0, 1.0, 0.0, -l, 1.0);

        assert!((k * translation_x).norm() < 1e-12);
        assert!((k * translation_z).norm() < 1e-12);
        assert!((k * rotation).norm() < 1e-12);
    }

    #[test]
    fn mass_blend_conserves_momentum() {
        let bar = Bar2D::new(1);
        let total = props().mass();

        for mi in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let m = bar.mass_lcs(&props(), mi);
            assert!((m - m.transpose()).norm() < 1e-12);
            assert!(m.determinant() >= -1e-12);

            let axial = Vector6::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
            let transverse = Vector6::new(0.0, 1.0, 0.0, 0.0, 1.0, 0.0);
            let axial_momentum = (m * axial)[0] + (m * axial)[3];
            let transverse_momentum = (m * transverse)[1] + (m * transverse)[4];
            assert!((axial_momentum - total).abs() < 1e-12);
            assert!((transverse_momentum - total).abs() < 1e-12);
        }
    }

    #[test]
    fn consistent_mass_has_positive_diagonal() {
        let bar = Bar2D::new(1);
        let m = bar.mass_lcs(&props(), 0.0);
        for i in 0..6 {
            assert!(m[(i, i)] > 0.0);
        }
    }

    #[test]
    fn lumped_mass_has_no_rotational_inertia() {
        let bar = Bar2D::new(1);
        let m = bar.mass_lcs(&props(), 1.0);
        assert_eq!(m[(2, 2)], 0.0);
        assert_eq!(m[(5, 5)], 0.0);
        assert_eq!(m[(0, 0)], 3.0);
        assert_eq!(m[(1, 1)], 3.0);
    }

    #[test]
    fn distributed_load_adds_end_moments() {
        let bar = Bar2D::new(1);
        let f = bar.load_lcs(&props(), 0.0, -2.0);
        assert_eq!(f[0], 0.0);
        assert_eq!(f[1], 3.0);
        assert_eq!(f[2], -1.5);
        assert_eq!(f[4], 3.0);
        assert_eq!(f[5], 1.5);
    }

    #[test]
    fn end_swap_leaves_stiffness_pattern_consistent() {
        // Swapping ends mirrors the element; the stiffness seen from
        // either numbering must agree after the permutation.
        let bar = Bar2D::new(1);
        let k = bar.stiffness_lcs(&props());

        let mut p = Matrix6::zeros();
        for i in 0..3 {
            p[(i, i + 3)] = 1.0;
            p[(i + 3, i)] = 1.0;
        }
        let swapped = p.transpose() * k * p;

        // The mirrored element also flips its local axes; rotate both
        // ends by 180 degrees in plane.
        let mut r = Matrix6::zeros();
        for block in [0, 3] {
            r[(block, block)] = -1.0;
            r[(block + 1, block + 1)] = -1.0;
            r[(block + 2, block + 2)] = 1.0;
        }
        let mirrored = r.transpose() * swapped * r;
        assert!((mirrored - k).norm() < 1e-12);
    }

    #[test]
    fn end_swap_leaves_mass_pattern_consistent() {
        let bar = Bar2D::new(1);

        let mut p = Matrix6::zeros();
        for i in 0..3 {
            p[(i, i + 3)] = 1.0;
            p[(i + 3, i)] = 1.0;
        }
        let mut r = Matrix6::zeros();
        for block in [0, 3] {
            r[(block, block)] = -1.0;
            r[(block + 1, block + 1)] = -1.0;
            r[(block + 2, block + 2)] = 1.0;
        }

        for mi in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let m = bar.mass_lcs(&props(), mi);
            let swapped = p.transpose() * m * p;
            let mirrored = r.transpose() * swapped * r;
            assert!((mirrored - m).norm() < 1e-12);
        }
    }

    #[test]
    fn blend_ratio_is_clamped_to_unit_interval() {
        let bar = Bar2D::new(1);
        assert_eq!(bar.mass_lcs(&props(), 1.7), bar.mass_lcs(&props(), 1.0));
        assert_eq!(bar.mass_lcs(&props(), -0.3), bar.mass_lcs(&props(), 0.0));
    }

    #[test]
    fn geometric_matrix_is_symmetric_with_axial_placeholder() {
        let bar = Bar2D::new(1);
        let g = bar.geometric_lcs(&props(), 15.0, 1.0e-3);

        assert!((g - g.transpose()).norm() < 1e-12);
        assert!((g[(1, 1)] - 6.0).abs() < 1e-12);
        assert!((g[(2, 2)] - 6.0).abs() < 1e-12);
        // min(6/5, 2 l^2 / 15) * N / l * 1e-3, both equal 6 here.
        assert!((g[(0, 0)] - 6.0e-3).abs() < 1e-15);
        assert!(g[(0, 0)] > 0.0);
    }

    #[test]
    fn releases_map_to_freedom_order() {
        let bar = Bar2D::with_releases(1, [false, false, true], [true, false, false]);
        assert_eq!(
            bar.releases(),
            [false, false, true, true, false, false]
        );
    }
}
