//! Linear static finite element solver for planar frame structures.
//!
//! Works on the entity model from `frame2d-model`: rod and Bernoulli
//! beam elements in the x-z plane, three freedoms (u, w, phi) per
//! node. The stages follow the classic displacement method and are
//! usable on their own or chained through [`StaticAnalysis`].

pub mod analysis;
pub mod assembly;
pub mod boundary_conditions;
pub mod elements;
pub mod error;
pub mod localization;
pub mod postprocess;
pub mod solve;

pub use analysis::{assemble, geometric_system, AnalysisConfig, AnalysisResults, StaticAnalysis};
pub use assembly::GlobalSystem;
pub use boundary_conditions::{BoundaryConditions, Constraint, ElementLoad, NodalLoad};
pub use elements::{
    chord_length, transformation, Bar2D, Element as ElementTrait, ElementProperties, LineElement,
    Rod2D,
};
pub use error::{Result, SolverError};
pub use localization::DofMap;
pub use postprocess::{axial_forces, element_forces};
pub use solve::{partition_solve, Solution};
