//! Material definitions with optional temperature dependence.

use std::collections::HashMap;

use crate::error::{ModelError, Result};
use crate::node::crop_label;

/// A scalar material property: either a constant or a monotonic
/// temperature table interpolated linearly.
///
/// Only constructible through [`TempTable::constant`] and
/// [`TempTable::from_pairs`], so a table is always non-empty with
/// strictly increasing temperatures. Lookups outside the table range
/// clamp to the end values. A one-row table degrades to a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct TempTable(Repr);

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    Constant(f64),
    Table(Vec<(f64, f64)>),
}

impl TempTable {
    /// Constant property value.
    pub fn constant(value: f64) -> Self {
        TempTable(Repr::Constant(value))
    }

    /// Build a table from (temperature, value) pairs.
    ///
    /// Temperatures must be strictly increasing; an empty table is
    /// rejected and a single pair collapses to a constant.
    pub fn from_pairs(pairs: Vec<(f64, f64)>) -> Result<Self> {
        match pairs.len() {
            0 => Err(ModelError::NonMonotonicTable),
            1 => Ok(TempTable::constant(pairs[0].1)),
            _ => {
                if pairs.windows(2).any(|w| w[1].0 <= w[0].0) {
                    return Err(ModelError::NonMonotonicTable);
                }
                Ok(TempTable(Repr::Table(pairs)))
            }
        }
    }

    /// Evaluate the property at a temperature.
    pub fn value_at(&self, temperature: f64) -> f64 {
        match &self.0 {
            Repr::Constant(v) => *v,
            Repr::Table(pairs) => {
                let first = pairs[0];
                let last = pairs[pairs.len() - 1];
                if temperature <= first.0 {
                    return first.1;
                }
                if temperature >= last.0 {
                    return last.1;
                }
                for w in pairs.windows(2) {
                    let (t0, v0) = w[0];
                    let (t1, v1) = w[1];
                    if temperature <= t1 {
                        return v0 + (v1 - v0) * (temperature - t0) / (t1 - t0);
                    }
                }
                last.1
            }
        }
    }
}

/// A linear-elastic material.
///
/// Every property can be temperature dependent; the shear modulus is
/// always derived as G = E / (2 (1 + nu)).
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Unique material id.
    pub id: i32,
    /// Optional label, cropped to 16 characters.
    pub label: Option<String>,
    /// Density rho.
    pub density: TempTable,
    /// Young's modulus E.
    pub youngs_modulus: TempTable,
    /// Poisson ratio nu.
    pub poisson_ratio: TempTable,
    /// Longitudinal thermal expansion coefficient alpha.
    pub thermal_expansion: TempTable,
}

impl Material {
    /// Create a material with constant properties.
    pub fn linear_elastic(id: i32, label: &str, ro: f64, e: f64, nu: f64, a: f64) -> Self {
        Self {
            id,
            label: Some(crop_label(label)),
            density: TempTable::constant(ro),
            youngs_modulus: TempTable::constant(e),
            poisson_ratio: TempTable::constant(nu),
            thermal_expansion: TempTable::constant(a),
        }
    }

    /// Shear modulus G at a temperature, derived from E and nu.
    pub fn shear_modulus(&self, temperature: f64) -> f64 {
        let e = self.youngs_modulus.value_at(temperature);
        let nu = self.poisson_ratio.value_at(temperature);
        e / (2.0 * (1.0 + nu))
    }
}

/// Material collection keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Materials {
    items: Vec<Material>,
    index: HashMap<i32, usize>,
}

impl Materials {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material, rejecting duplicate ids.
    pub fn add(&mut self, material: Material) -> Result<()> {
        if self.index.contains_key(&material.id) {
            return Err(ModelError::DuplicateId {
                kind: "material",
                id: material.id,
            });
        }
        self.index.insert(material.id, self.items.len());
        self.items.push(material);
        Ok(())
    }

    /// Look up a material by id.
    pub fn get(&self, id: i32) -> Option<&Material> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_value_ignores_temperature() {
        let table = TempTable::constant(210.0e9);
        assert_eq!(table.value_at(-40.0), 210.0e9);
        assert_eq!(table.value_at(500.0), 210.0e9);
    }

    #[test]
    fn interpolates_linearly_between_rows() {
        let table = TempTable::from_pairs(vec![(0.0, 200.0), (100.0, 180.0)]).unwrap();
        assert!((table.value_at(50.0) - 190.0).abs() < 1e-12);
        assert!((table.value_at(25.0) - 195.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_table_range() {
        let table = TempTable::from_pairs(vec![(0.0, 200.0), (100.0, 180.0)]).unwrap();
        assert_eq!(table.value_at(-20.0), 200.0);
        assert_eq!(table.value_at(140.0), 180.0);
    }

    #[test]
    fn one_row_table_degrades_to_constant() {
        let table = TempTable::from_pairs(vec![(20.0, 7850.0)]).unwrap();
        assert_eq!(table, TempTable::constant(7850.0));
    }

    #[test]
    fn rejects_empty_and_non_increasing_tables() {
        assert_eq!(
            TempTable::from_pairs(vec![]).unwrap_err(),
            ModelError::NonMonotonicTable
        );
        assert_eq!(
            TempTable::from_pairs(vec![(0.0, 1.0), (0.0, 2.0)]).unwrap_err(),
            ModelError::NonMonotonicTable
        );
        assert_eq!(
            TempTable::from_pairs(vec![(10.0, 1.0), (0.0, 2.0)]).unwrap_err(),
            ModelError::NonMonotonicTable
        );
    }

    #[test]
    fn shear_modulus_is_derived() {
        let steel = Material::linear_elastic(1, "steel", 7.85e-9, 210.0e6, 0.3, 1.2e-5);
        let expected = 210.0e6 / (2.0 * 1.3);
        assert!((steel.shear_modulus(20.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn crops_multibyte_labels_by_characters() {
        let concrete =
            Material::linear_elastic(1, "béton-précontraint", 2.5e-9, 35.0e3, 0.2, 1.0e-5);
        assert_eq!(concrete.label.as_deref(), Some("béton-précontrai"));
    }

    #[test]
    fn rejects_duplicate_material_id() {
        let mut materials = Materials::new();
        materials
            .add(Material::linear_elastic(1, "steel", 7.85e-9, 210.0e6, 0.3, 1.2e-5))
            .unwrap();
        let err = materials
            .add(Material::linear_elastic(1, "alu", 2.7e-9, 70.0e6, 0.34, 2.3e-5))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateId {
                kind: "material",
                id: 1
            }
        );
    }
}
