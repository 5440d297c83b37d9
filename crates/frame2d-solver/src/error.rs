//! Solver error types.

use frame2d_model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors raised while assembling or solving a system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The structural model is inconsistent.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// An element has coincident end nodes and no defined axis.
    #[error("element {0} has zero length")]
    DegenerateGeometry(i32),

    /// A boundary condition or load references an element that does
    /// not exist.
    #[error("element {0} does not exist")]
    UnknownElement(i32),

    /// The free-free stiffness partition is singular; the structure is
    /// a mechanism or insufficiently supported.
    #[error("stiffness matrix is singular, structure is not sufficiently constrained")]
    SingularSystem,
}
