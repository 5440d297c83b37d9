//! Supports and loads.
//!
//! Constraints fix nodal freedoms to zero. Loads come in two flavours:
//! concentrated nodal loads given directly in the GCS, and element
//! loads (uniform distributed forces in the LCS plus a temperature
//! rise) converted to equivalent nodal loads during assembly. Each
//! load carries a pattern id so load cases can be told apart in the
//! input; the static pipeline sums every pattern it is given.

use serde::{Deserialize, Serialize};

/// Zero-displacement support at a node, one flag per (u, w, phi).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub id: i32,
    pub node: i32,
    pub fixed: [bool; 3],
}

impl Constraint {
    pub fn new(id: i32, node: i32, fixed: [bool; 3]) -> Self {
        Self { id, node, fixed }
    }

    /// Clamp all three freedoms.
    pub fn fixed(id: i32, node: i32) -> Self {
        Self::new(id, node, [true; 3])
    }

    /// Pin: both translations fixed, rotation free.
    pub fn pinned(id: i32, node: i32) -> Self {
        Self::new(id, node, [true, true, false])
    }
}

/// Concentrated load at a node in global components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodalLoad {
    pub id: i32,
    pub pattern: i32,
    pub node: i32,
    pub fx: f64,
    pub fz: f64,
    pub my: f64,
}

impl NodalLoad {
    pub fn new(id: i32, pattern: i32, node: i32, fx: f64, fz: f64, my: f64) -> Self {
        Self {
            id,
            pattern,
            node,
            fx,
            fz,
            my,
        }
    }
}

/// Uniform element load: distributed forces per unit length in the
/// element LCS and a temperature rise above the reference temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementLoad {
    pub id: i32,
    pub pattern: i32,
    pub element: i32,
    pub fx: f64,
    pub fz: f64,
    pub dt: f64,
}

impl ElementLoad {
    pub fn distributed(id: i32, pattern: i32, element: i32, fx: f64, fz: f64) -> Self {
        Self {
            id,
            pattern,
            element,
            fx,
            fz,
            dt: 0.0,
        }
    }

    pub fn thermal(id: i32, pattern: i32, element: i32, dt: f64) -> Self {
        Self {
            id,
            pattern,
            element,
            fx: 0.0,
            fz: 0.0,
            dt,
        }
    }
}

/// All boundary conditions of an analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundaryConditions {
    pub constraints: Vec<Constraint>,
    pub nodal_loads: Vec<NodalLoad>,
    pub element_loads: Vec<ElementLoad>,
}

impl BoundaryConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constraint declaration order decides equation numbering, so
    /// these keep insertion order.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn add_nodal_load(&mut self, load: NodalLoad) {
        self.nodal_loads.push(load);
    }

    pub fn add_element_load(&mut self, load: ElementLoad) {
        self.element_loads.push(load);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_shorthands() {
        assert_eq!(Constraint::fixed(1, 4).fixed, [true, true, true]);
        assert_eq!(Constraint::pinned(2, 4).fixed, [true, true, false]);
    }

    #[test]
    fn keeps_constraint_order() {
        let mut bcs = BoundaryConditions::new();
        bcs.add_constraint(Constraint::fixed(1, 3));
        bcs.add_constraint(Constraint::pinned(2, 1));
        assert_eq!(bcs.constraints[0].node, 3);
        assert_eq!(bcs.constraints[1].node, 1);
    }
}
